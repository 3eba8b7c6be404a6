//! Category taxonomy: category → display color + ordered subcategories.
//!
//! Loaded once at startup from a JSON document such as
//!
//! ```json
//! { "Linuxアプリ": { "color": "#4CAF50", "subcategories": ["プロセス間通信"] } }
//! ```
//!
//! Any failure to read or parse the document falls back to the built-in default.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Color used for categories missing from the taxonomy.
pub const FALLBACK_COLOR: &str = "#999999";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub color: String,
    pub subcategories: Vec<String>,
}

/// Read-only after load. Category order follows the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<(String, CategorySpec)>,
}

impl Taxonomy {
    /// Load the taxonomy at `path`, or the built-in default if that fails.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            warning(format!(
                "Taxonomy file {} not found, using the default categories.",
                path.display()
            ));
            return Self::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(Into::into)
            .and_then(|text| Self::from_json(&text));

        match parsed {
            Ok(t) => t,
            Err(e) => {
                warning(format!(
                    "Failed to load taxonomy from {} ({e}), using the default categories.",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    pub fn from_json(text: &str) -> AppResult<Self> {
        let map: Map<String, Value> = serde_json::from_str(text)?;

        let mut categories = Vec::with_capacity(map.len());
        for (name, value) in map {
            let spec: CategorySpec = serde_json::from_value(value)?;
            categories.push((name, spec));
        }

        Ok(Self { categories })
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        let mut map = Map::new();
        for (name, spec) in &self.categories {
            map.insert(name.clone(), serde_json::to_value(spec)?);
        }
        Ok(serde_json::to_string_pretty(&map)?)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategorySpec)> {
        self.categories
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
    }

    fn spec(&self, category: &str) -> Option<&CategorySpec> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, spec)| spec)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.spec(category).is_some()
    }

    /// Subcategories of `category`, empty when the category is unknown.
    pub fn subcategories(&self, category: &str) -> &[String] {
        self.spec(category)
            .map(|s| s.subcategories.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_subcategory(&self, category: &str, subcategory: &str) -> bool {
        self.subcategories(category)
            .iter()
            .any(|s| s == subcategory)
    }

    pub fn color(&self, category: &str) -> &str {
        self.spec(category)
            .map(|s| s.color.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn category(color: &str, subcategories: &[&str]) -> CategorySpec {
    CategorySpec {
        color: color.to_string(),
        subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        let device = ["デバイス制御", "デバイス設定"];

        Self {
            categories: vec![
                (
                    "Linuxアプリ".to_string(),
                    category(
                        "#4CAF50",
                        &[
                            "プロセス間通信",
                            "チップ間通信",
                            "機器間通信",
                            "オーディオ処理",
                        ],
                    ),
                ),
                ("Linuxカーネル".to_string(), category("#2196F3", &device)),
                ("Linux uboot".to_string(), category("#FF9800", &device)),
                ("Linux rootfs".to_string(), category("#9C27B0", &device)),
                ("RTOS DSPソフト".to_string(), category("#F44336", &device)),
            ],
        }
    }
}
