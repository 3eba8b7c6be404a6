// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod logic;

pub use csv::{escape_field, generate_csv};
pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion notice for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which entries an export covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportScope {
    /// The selected week
    Week,
    /// The current calendar month
    Month,
    /// Everything, newest week first
    All,
}

impl ExportScope {
    pub fn describe(&self) -> &'static str {
        match self {
            ExportScope::Week => "this week",
            ExportScope::Month => "this month",
            ExportScope::All => "any period",
        }
    }
}
