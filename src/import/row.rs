use crate::config::Taxonomy;
use crate::models::{EntryDraft, EntryFields};
use regex::Regex;
use std::sync::LazyLock;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is a valid regex")
});

/// One data row of an import file: `date, category, subcategory, hours, memo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub date: String,
    pub draft: EntryDraft,
}

impl ImportRow {
    /// Map fields by position. Rows with fewer than five fields are not rows.
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        if fields.len() < 5 {
            return None;
        }

        let mut it = fields.into_iter();
        let mut next = || it.next().unwrap_or_default();

        Some(Self {
            date: next(),
            draft: EntryDraft {
                category: next(),
                subcategory: next(),
                hours: next(),
                memo: next(),
            },
        })
    }

    /// The date must look like `YYYY-MM-DD`; the rest goes through the same
    /// checks as interactive input. The date itself is not kept.
    pub fn validate(self, taxonomy: &Taxonomy) -> Option<EntryFields> {
        if !DATE_RE.is_match(&self.date) {
            return None;
        }
        EntryFields::validate(self.draft, taxonomy).ok()
    }
}
