// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `dir/filename` for writing, creating `dir` if needed.
///
/// An existing file is only replaced with `force` or after the user agrees;
/// declining cancels the export.
pub(crate) fn prepare_target(dir: &Path, filename: &str, force: bool) -> AppResult<PathBuf> {
    let path = dir.join(filename);

    if path.exists() && !force {
        if !confirm(format!("{} already exists. Overwrite it?", path.display())) {
            return Err(AppError::Export(format!(
                "cancelled, {} left unchanged",
                path.display()
            )));
        }
        info("Existing file will be overwritten.");
    }

    fs::create_dir_all(dir)?;
    Ok(path)
}
