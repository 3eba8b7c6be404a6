//! CSV import into the record store.

pub mod parser;
pub mod row;

pub use parser::{HeaderRule, parse_csv_line, split_records};
pub use row::ImportRow;

use crate::config::Taxonomy;
use crate::core::RecordStore;
use crate::export::csv::UTF8_BOM;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("the file contains no data")]
    Empty,

    #[error("unexpected CSV format: header is missing {}", .missing.join(", "))]
    BadHeader { missing: Vec<String> },

    #[error("no valid rows found ({skipped} skipped)")]
    NoValidRows { skipped: usize },

    #[error("{imported} rows were read but the store could not be written")]
    NotPersisted { imported: usize },

    #[error("not a CSV file: {0}")]
    NotCsv(String),

    #[error("failed to read file: {0}")]
    Read(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.skipped > 0 {
            write!(
                f,
                "{} entries imported ({} skipped)",
                self.imported, self.skipped
            )
        } else {
            write!(f, "{} entries imported", self.imported)
        }
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Parse `text` and add every valid row to `store`.
    ///
    /// Imported entries land in the store's selected week with fresh ids.
    /// Invalid rows are skipped and counted; importing nothing is an error,
    /// and so is any row that could not be written to the store.
    pub fn parse_and_import_csv(
        store: &mut RecordStore,
        taxonomy: &Taxonomy,
        text: &str,
    ) -> Result<ImportSummary, ImportError> {
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
        let records = split_records(text.trim());

        if records.len() < 2 {
            return Err(ImportError::Empty);
        }

        let missing = HeaderRule::IMPORT.missing(records[0]);
        if !missing.is_empty() {
            return Err(ImportError::BadHeader {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        let mut imported = 0;
        let mut skipped = 0;
        let mut persisted = true;

        for record in &records[1..] {
            let line = record.trim();
            if line.is_empty() {
                continue;
            }

            let Some(row) = ImportRow::from_fields(parse_csv_line(line)) else {
                continue;
            };

            match row.validate(taxonomy) {
                Some(fields) => {
                    persisted &= store.add(fields).persisted;
                    imported += 1;
                }
                None => skipped += 1,
            }
        }

        if imported == 0 {
            return Err(ImportError::NoValidRows { skipped });
        }
        if !persisted {
            return Err(ImportError::NotPersisted { imported });
        }

        Ok(ImportSummary { imported, skipped })
    }
}
