//! Category colours: taxonomy `#RRGGBB` values rendered as terminal colours.

use ansi_term::{Colour, Style};

/// Parse `#RRGGBB` (leading `#` optional).
pub fn hex_to_colour(hex: &str) -> Option<Colour> {
    let h = hex.trim().trim_start_matches('#');
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some(Colour::RGB(r, g, b))
}

/// `text` on a background of the category colour, like the list badges.
/// Falls back to bold text when the colour does not parse.
pub fn badge(text: &str, hex: &str) -> String {
    match hex_to_colour(hex) {
        Some(colour) => Style::new()
            .on(colour)
            .fg(Colour::White)
            .bold()
            .paint(format!(" {text} "))
            .to_string(),
        None => Style::new().bold().paint(text).to_string(),
    }
}
