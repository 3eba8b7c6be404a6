//! Raw key-value backends behind the [`Storage`](super::Storage) adapter.

use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// A persistent string-keyed map of JSON values.
///
/// Backends report failures; swallowing and logging them is the adapter's job.
pub trait Backend {
    fn get(&self, key: &str) -> AppResult<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
    fn clear(&mut self) -> AppResult<()>;
}

/// Every key lives in a single JSON object file, rewritten wholesale on each write.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> AppResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Same as `read_map`, except that a corrupt file counts as empty:
    /// the next write replaces it.
    fn read_map_for_write(&self) -> AppResult<Map<String, Value>> {
        match self.read_map() {
            Err(AppError::Json(_)) => Ok(Map::new()),
            other => other,
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Backend for FileBackend {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> AppResult<()> {
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        let mut map = self.read_map_for_write()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.write_map(&Map::new())
    }
}

/// In-process backend, used by tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryBackend {
    map: Map<String, Value>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> AppResult<()> {
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.map.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.map.clear();
        Ok(())
    }
}
