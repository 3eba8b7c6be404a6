// src/export/logic.rs

use crate::core::RecordStore;
use crate::core::week::format_date;
use crate::errors::AppResult;
use crate::export::csv::{
    all_data_filename, generate_csv, monthly_filename, weekly_filename, with_bom,
};
use crate::export::fs_utils::prepare_target;
use crate::export::{ExportFormat, ExportScope, notify_export_success};
use crate::models::Entry;
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::{Path, PathBuf};

/// High-level export: pick the entries, name the file, write it.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the entries of `scope` into `dir`.
    ///
    /// Returns the written path, or `None` when the scope holds no entries.
    pub fn export(
        store: &RecordStore,
        scope: ExportScope,
        format: ExportFormat,
        dir: &Path,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let entries = select(store, scope);

        if entries.is_empty() {
            warning(format!("No entries to export for {}.", scope.describe()));
            return Ok(None);
        }

        let filename = build_filename(store, scope, format);
        let path = prepare_target(dir, &filename, force)?;

        let content = match format {
            ExportFormat::Csv => {
                let week_line = match scope {
                    ExportScope::Week => Some(format_date(store.current_week_start())),
                    _ => None,
                };
                match generate_csv(&entries, week_line.as_deref()) {
                    Some(csv) => with_bom(&csv),
                    None => return Ok(None),
                }
            }
            ExportFormat::Json => serde_json::to_string_pretty(&entries)?,
        };

        info(format!(
            "Exporting {} entries to {}: {}",
            entries.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        fs::write(&path, content)?;

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(Some(path))
    }
}

fn select(store: &RecordStore, scope: ExportScope) -> Vec<&Entry> {
    match scope {
        ExportScope::Week => store.get_this_week(),
        ExportScope::Month => store.get_this_month(),
        ExportScope::All => store.get_all(),
    }
}

fn build_filename(store: &RecordStore, scope: ExportScope, format: ExportFormat) -> String {
    let today = store.today();
    let csv_name = match scope {
        ExportScope::Week => weekly_filename(store.current_week_start()),
        ExportScope::Month => monthly_filename(today),
        ExportScope::All => all_data_filename(today),
    };

    match format {
        ExportFormat::Csv => csv_name,
        ExportFormat::Json => Path::new(&csv_name)
            .with_extension("json")
            .to_string_lossy()
            .to_string(),
    }
}
