//! Unified application error type.
//! All modules (storage, core, import, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::import::ImportError;
use crate::models::fields::ValidationError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid entry: {0}")]
    Validation(#[from] ValidationError),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("No entry found with id {0}")]
    NotFound(String),

    #[error("Failed to persist data: {0}")]
    Storage(String),

    // ---------------------------
    // Interchange
    // ---------------------------
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
