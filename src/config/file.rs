use crate::error::{Error, Result};
use crate::selector::OptionOverrides;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "ITEM_SELECTOR_CONFIG";

/// On-disk configuration: option overrides at the top level plus named presets.
///
/// ```toml
/// item_type = "card"
///
/// [presets.loot]
/// ask_for_count = true
/// count_name = "pieces"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(flatten)]
    pub options: OptionOverrides,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub presets: BTreeMap<String, OptionOverrides>,
}

impl ConfigFile {
    /// Read a config file. A missing file yields `None` unless `required`.
    pub fn load(path: &Path, required: bool) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound && !required => {
                debug!("no config file at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(Error::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let file = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(file))
    }

    pub fn preset(&self, name: &str) -> Result<&OptionOverrides> {
        self.presets.get(name).ok_or_else(|| Error::PresetNotFound {
            name: name.to_string(),
            available: self.preset_list(),
        })
    }

    pub fn preset_names(&self) -> Vec<String> {
        self.presets.keys().cloned().collect()
    }

    fn preset_list(&self) -> String {
        if self.presets.is_empty() {
            "none".to_string()
        } else {
            self.preset_names().join(", ")
        }
    }
}

pub fn default_config_path() -> PathBuf {
    env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            directories::BaseDirs::new().map(|base_dirs| {
                base_dirs
                    .home_dir()
                    .join(".config")
                    .join("item-selector")
                    .join("config.toml")
            })
        })
        .unwrap_or_else(|| {
            // Fallback to current directory
            env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("item-selector.toml")
        })
}

/// Starter config written by `config init`.
pub const CONFIG_TEMPLATE: &str = r#"# item-selector configuration
#
# Top-level keys override the built-in defaults for every selection.
# Keys accept snake_case or camelCase spelling.

# show_finished = true
# finished_name = "== Done =="
# show_other = false
# other_name = "== Other =="
# item_type = "item"
# item_type_article = "the"
# keep_selected_items = false
# ask_for_count = false
# count_offset = 0
# count_name = "copies"
# count_shown = true
# ask_for_attributes = false
# attribute_list = [["bold", "**", "**"], ["italic", "_", "_"]]
# default_attribute = ["none", "", ""]
# attribute_name = "attribute"
# attribute_article = "an"

# Presets are selected with --preset <NAME> and layer over the keys above.
# [presets.loot]
# item_type = "treasure"
# ask_for_count = true
"#;

/// Write the starter config to `path`, refusing to replace an existing file
/// unless `force` is set.
pub fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::InvalidArgument {
            message: format!(
                "Config file '{}' already exists. Use --force to overwrite.",
                path.display()
            ),
        });
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| Error::ConfigIo {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, CONFIG_TEMPLATE).map_err(|source| Error::ConfigIo {
        path: path.to_path_buf(),
        source,
    })
}
