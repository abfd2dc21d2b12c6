use crate::error::{Error, Result};
use crate::selector::{Item, OptionOverrides};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A list of candidate items loaded from a TOML or JSON file.
///
/// ```toml
/// limit = 3
/// items = ["Sword", { name = "Arrow", ask_for_count = true }]
///
/// [options]
/// item_type = "weapon"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    /// Labels shown to the operator; defaults to each item's name.
    #[serde(default)]
    pub display: Option<Vec<String>>,
    pub items: Vec<Item>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub options: OptionOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => CatalogFormat::Json,
            _ => CatalogFormat::Toml,
        }
    }
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self> {
        let parsed = match CatalogFormat::from_path(path) {
            CatalogFormat::Json => {
                serde_json::from_str::<Catalog>(content).map_err(|err| err.to_string())
            }
            CatalogFormat::Toml => toml::from_str::<Catalog>(content).map_err(|err| err.to_string()),
        };

        parsed.map_err(|message| Error::CatalogParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Display labels, falling back to the item names.
    pub fn display_list(&self) -> Vec<String> {
        self.display
            .clone()
            .unwrap_or_else(|| self.items.iter().map(Item::name).collect())
    }

    pub fn option_layer(&self, path: &Path) -> (PathBuf, OptionOverrides) {
        (path.to_path_buf(), self.options.clone())
    }
}
