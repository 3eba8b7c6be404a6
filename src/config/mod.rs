use crate::errors::AppResult;
use crate::storage::{FileBackend, Storage};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod taxonomy;

pub use taxonomy::{CategorySpec, Taxonomy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_taxonomy")]
    pub taxonomy: String,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_taxonomy() -> String {
    Config::taxonomy_file().to_string_lossy().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            taxonomy: default_taxonomy(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("workhours")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".workhours")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workhours.conf")
    }

    /// Default location of the JSON key-value store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("store.json")
    }

    /// Default location of the taxonomy document
    pub fn taxonomy_file() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Load configuration from file, or return defaults if missing or unreadable
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        let parsed: AppResult<Config> = fs::read_to_string(&path)
            .map_err(Into::into)
            .and_then(|content| serde_yaml::from_str(&content).map_err(Into::into));

        match parsed {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!(
                    "Ignoring configuration file {} ({e}), using defaults.",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    pub fn taxonomy_path(&self) -> PathBuf {
        expand_tilde(&self.taxonomy)
    }

    /// Initialize configuration file, default taxonomy and empty store.
    ///
    /// In test mode the configuration file itself is left untouched.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(self)?;
            fs::write(Self::config_file(), yaml)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        let taxonomy_path = self.taxonomy_path();
        if !taxonomy_path.exists() {
            ensure_parent(&taxonomy_path)?;
            fs::write(&taxonomy_path, Taxonomy::default().to_json_pretty()?)?;
        }
        success(format!("Taxonomy:    {}", taxonomy_path.display()));

        let store_path = self.store_path();
        if !store_path.exists() {
            let mut storage = Storage::new(FileBackend::new(&store_path));
            if !storage.clear() {
                return Err(crate::errors::AppError::Storage(format!(
                    "could not create {}",
                    store_path.display()
                )));
            }
        }
        success(format!("Store:       {}", store_path.display()));

        Ok(())
    }
}

fn ensure_parent(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
