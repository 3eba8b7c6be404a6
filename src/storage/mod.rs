//! Key-value storage adapter.
//!
//! Thin wrapper over a [`Backend`]: values are JSON-serialized, and every
//! failure is logged and reported as `false` / `None` instead of an error.

mod backend;

pub use backend::{Backend, FileBackend, MemoryBackend};

use crate::ui::messages::error;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Key holding the JSON array of all entries.
pub const DATA_KEY: &str = "workTimeData";
/// Last category used in `add`, for prefill.
pub const LAST_CATEGORY_KEY: &str = "lastCategory";
/// Last subcategory used in `add`, for prefill.
pub const LAST_SUBCATEGORY_KEY: &str = "lastSubcategory";

pub struct Storage {
    backend: Box<dyn Backend>,
}

impl Storage {
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Storage backed by a JSON file at `path`.
    pub fn open(path: &Path) -> Self {
        Self::new(FileBackend::new(path))
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Serialize `data` under `key`.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, data: &T) -> bool {
        let result = serde_json::to_value(data)
            .map_err(Into::into)
            .and_then(|value| self.backend.set(key, value));

        match result {
            Ok(()) => true,
            Err(e) => {
                error(format!("Failed to save '{key}': {e}"));
                false
            }
        }
    }

    /// Load and deserialize the value under `key`.
    /// Missing keys yield `None` silently; unreadable or mistyped ones are logged.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = match self.backend.get(key) {
            Ok(Some(v)) => v,
            Ok(None) => return None,
            Err(e) => {
                error(format!("Failed to load '{key}': {e}"));
                return None;
            }
        };

        if value.is_null() {
            return None;
        }

        match serde_json::from_value(value) {
            Ok(data) => Some(data),
            Err(e) => {
                error(format!("Failed to load '{key}': {e}"));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        match self.backend.remove(key) {
            Ok(()) => true,
            Err(e) => {
                error(format!("Failed to remove '{key}': {e}"));
                false
            }
        }
    }

    pub fn clear(&mut self) -> bool {
        match self.backend.clear() {
            Ok(()) => true,
            Err(e) => {
                error(format!("Failed to clear storage: {e}"));
                false
            }
        }
    }
}
