//! Coloured one-line notices, the CLI's notification banners.

use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, Write};

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn banner(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", banner(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", banner(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", banner(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", banner(Colour::Red, ICON_ERR), msg);
}

/// Section header above lists and summaries
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("====================== {msg}");
    println!("{}\n", Style::new().bold().fg(Colour::Blue).paint(line));
}

/// Show `prompt` as a warning and read a yes/no answer from stdin.
/// Anything but `y`/`yes` (or a read failure) counts as no.
pub fn confirm<T: fmt::Display>(prompt: T) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
