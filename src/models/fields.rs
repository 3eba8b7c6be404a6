//! Validated construction of the mutable part of an entry.

use crate::config::Taxonomy;
use thiserror::Error;

/// Raw, unvalidated input as typed in a form or read from a CSV row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub category: String,
    pub subcategory: String,
    pub hours: String,
    pub memo: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("a category is required")]
    MissingCategory,

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("a subcategory is required")]
    MissingSubcategory,

    #[error("'{subcategory}' is not a subcategory of '{category}'")]
    UnknownSubcategory {
        category: String,
        subcategory: String,
    },

    #[error("hours must be a number greater than 0 (got '{0}')")]
    InvalidHours(String),
}

/// Category, subcategory, hours and memo, checked against a taxonomy.
///
/// The only way to obtain one is [`EntryFields::validate`], so an invalid
/// draft never turns into a partial entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFields {
    category: String,
    subcategory: String,
    hours: f64,
    memo: String,
}

impl EntryFields {
    pub fn validate(draft: EntryDraft, taxonomy: &Taxonomy) -> Result<Self, ValidationError> {
        let EntryDraft {
            category,
            subcategory,
            hours,
            memo,
        } = draft;

        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if !taxonomy.has_category(&category) {
            return Err(ValidationError::UnknownCategory(category));
        }

        if subcategory.is_empty() {
            return Err(ValidationError::MissingSubcategory);
        }
        if !taxonomy.has_subcategory(&category, &subcategory) {
            return Err(ValidationError::UnknownSubcategory {
                category,
                subcategory,
            });
        }

        let hours = parse_hours(&hours).ok_or(ValidationError::InvalidHours(hours))?;

        Ok(Self {
            category,
            subcategory,
            hours,
            memo,
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub(crate) fn into_parts(self) -> (String, String, f64, String) {
        (self.category, self.subcategory, self.hours, self.memo)
    }
}

/// Finite and strictly positive, or nothing.
pub fn parse_hours(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|h| h.is_finite() && *h > 0.0)
}
