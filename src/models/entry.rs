use super::fields::EntryFields;
use crate::core::week::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged block of work time.
///
/// Serialized with camelCase keys; this is the persisted layout under the
/// `workTimeData` store key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    id: String,
    #[serde(default)]
    week_start_date: String,
    category: String,
    subcategory: String,
    hours: f64,
    #[serde(default)]
    memo: String,
    #[serde(default)]
    created_at: i64,
    /// Records written before week bucketing carry a plain `date` instead of
    /// `weekStartDate`. Only read by range queries as a migration shim.
    #[serde(default, rename = "date", skip_serializing_if = "Option::is_none")]
    legacy_date: Option<String>,
}

impl Entry {
    pub(crate) fn new(fields: EntryFields, week_start: NaiveDate, created_at: i64) -> Self {
        let (category, subcategory, hours, memo) = fields.into_parts();
        Self {
            id: Uuid::new_v4().to_string(),
            week_start_date: format_date(week_start),
            category,
            subcategory,
            hours,
            memo,
            created_at,
            legacy_date: None,
        }
    }

    /// Replace the mutable fields; id, week and creation time stay put.
    pub(crate) fn apply(&mut self, fields: EntryFields) {
        let (category, subcategory, hours, memo) = fields.into_parts();
        self.category = category;
        self.subcategory = subcategory;
        self.hours = hours;
        self.memo = memo;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn week_start_date(&self) -> &str {
        &self.week_start_date
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

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Date used to bucket the entry in range queries: `weekStartDate`,
    /// or the legacy `date` for records that predate it.
    pub fn bucket_date(&self) -> &str {
        if !self.week_start_date.is_empty() {
            return &self.week_start_date;
        }
        self.legacy_date.as_deref().unwrap_or("")
    }
}
