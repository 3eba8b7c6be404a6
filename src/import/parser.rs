//! Low-level CSV reading for imports: record splitting, field splitting and
//! the header rule.

/// Column labels an import header has to mention.
///
/// The check is plain substring containment, so extra columns, other label
/// suffixes such as `作業時間(h)` and any column order are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderRule {
    required: &'static [&'static str],
}

impl HeaderRule {
    /// Date, category and hours labels.
    pub const IMPORT: HeaderRule = HeaderRule {
        required: &["日付", "技術分野", "作業時間"],
    };

    pub fn accepts(&self, header: &str) -> bool {
        self.missing(header).is_empty()
    }

    /// Required labels not found in `header`.
    pub fn missing(&self, header: &str) -> Vec<&'static str> {
        self.required
            .iter()
            .copied()
            .filter(|token| !header.contains(token))
            .collect()
    }
}

/// Split text into records at newlines that are not inside a quoted field.
///
/// A quoted field spanning lines therefore stays in one record; on input
/// without quoted newlines this is a plain split on `\n`.
pub fn split_records(text: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                records.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    records.push(&text[start..]);
    records
}

/// Split one record into fields.
///
/// - `"` toggles quoted mode
/// - `""` inside quotes is one literal `"`
/// - `,` outside quotes ends the field
/// - anything else is copied as is
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}
