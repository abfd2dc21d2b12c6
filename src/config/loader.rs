use crate::config::file::{ConfigFile, default_config_path};
use crate::error::{Error, Result};
use crate::selector::{Attribute, OptionOverrides, SelectorOptions};
use log::debug;
use serde::de::DeserializeOwned;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Prefix shared by every option environment variable.
pub const ENV_PREFIX: &str = "ITEM_SELECTOR_";

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// A layer that contributed to the resolved options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    ConfigFile(PathBuf),
    Preset(String),
    Environment(Vec<String>),
    Catalog(PathBuf),
    CommandLine,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::ConfigFile(path) => write!(f, "config file '{}'", path.display()),
            ConfigSource::Preset(name) => write!(f, "preset '{name}'"),
            ConfigSource::Environment(keys) => {
                write!(f, "environment variables ({})", keys.join(", "))
            }
            ConfigSource::Catalog(path) => write!(f, "catalog '{}'", path.display()),
            ConfigSource::CommandLine => write!(f, "command-line flags"),
        }
    }
}

/// Inputs for [`resolve`], ordered from lowest to highest precedence after the
/// config file: preset, environment, catalog, command line.
#[derive(Debug, Clone, Default)]
pub struct OptionsRequest {
    /// Explicit config path; a missing explicit file is an error.
    pub config_path: Option<PathBuf>,
    pub preset: Option<String>,
    pub catalog: Option<(PathBuf, OptionOverrides)>,
    pub command_line: OptionOverrides,
}

#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub options: SelectorOptions,
    pub sources: Vec<ConfigSource>,
    pub config_path: PathBuf,
    pub available_presets: Vec<String>,
}

/// Layer defaults, config file, preset, environment, catalog and command-line
/// overrides into the final selector options.
pub fn resolve(request: OptionsRequest) -> Result<ResolvedOptions> {
    resolve_from_source(request, &env_value)
}

fn resolve_from_source(
    request: OptionsRequest,
    get: &dyn Fn(&str) -> Option<String>,
) -> Result<ResolvedOptions> {
    let required = request.config_path.is_some();
    let config_path = request.config_path.unwrap_or_else(default_config_path);
    let file = ConfigFile::load(&config_path, required)?;

    let mut options = SelectorOptions::default();
    let mut sources = Vec::new();

    if let Some(file) = file.as_ref()
        && !file.options.is_empty()
    {
        file.options.apply_to(&mut options);
        sources.push(ConfigSource::ConfigFile(config_path.clone()));
    }

    if let Some(name) = request.preset {
        let preset = match file.as_ref() {
            Some(file) => file.preset(&name)?,
            None => {
                return Err(Error::PresetNotFound {
                    name,
                    available: "none".to_string(),
                });
            }
        };
        preset.apply_to(&mut options);
        sources.push(ConfigSource::Preset(name));
    }

    let (env_overrides, env_keys) = env_overrides(get)?;
    if !env_keys.is_empty() {
        env_overrides.apply_to(&mut options);
        sources.push(ConfigSource::Environment(env_keys));
    }

    if let Some((path, overrides)) = request.catalog
        && !overrides.is_empty()
    {
        overrides.apply_to(&mut options);
        sources.push(ConfigSource::Catalog(path));
    }

    if !request.command_line.is_empty() {
        request.command_line.apply_to(&mut options);
        sources.push(ConfigSource::CommandLine);
    }

    for source in &sources {
        debug!("applied options from {source}");
    }

    Ok(ResolvedOptions {
        options,
        sources,
        config_path,
        available_presets: file.map(|file| file.preset_names()).unwrap_or_default(),
    })
}

/// Collects `ITEM_SELECTOR_*` overrides and remembers which keys were set.
struct EnvReader<'a> {
    get: &'a dyn Fn(&str) -> Option<String>,
    keys: Vec<String>,
}

impl EnvReader<'_> {
    fn raw(&mut self, field: &str) -> Option<(String, String)> {
        let key = format!("{ENV_PREFIX}{field}");
        let value = (self.get)(&key)?;
        self.keys.push(key.clone());
        Some((key, value))
    }

    fn string(&mut self, field: &str) -> Option<String> {
        self.raw(field).map(|(_, value)| value)
    }

    fn flag(&mut self, field: &str) -> Result<Option<bool>> {
        let Some((key, value)) = self.raw(field) else {
            return Ok(None);
        };
        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::InvalidEnvValue { key, value }),
        }
    }

    fn integer(&mut self, field: &str) -> Result<Option<i64>> {
        let Some((key, value)) = self.raw(field) else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidEnvValue { key, value })
    }

    fn json<T: DeserializeOwned>(&mut self, field: &str) -> Result<Option<T>> {
        let Some((key, value)) = self.raw(field) else {
            return Ok(None);
        };
        serde_json::from_str(&value)
            .map(Some)
            .map_err(|_| Error::InvalidEnvValue { key, value })
    }
}

fn env_overrides(get: &dyn Fn(&str) -> Option<String>) -> Result<(OptionOverrides, Vec<String>)> {
    let mut env = EnvReader {
        get,
        keys: Vec::new(),
    };

    let overrides = OptionOverrides {
        show_finished: env.flag("SHOW_FINISHED")?,
        finished_name: env.string("FINISHED_NAME"),
        show_other: env.flag("SHOW_OTHER")?,
        other_name: env.string("OTHER_NAME"),
        item_type: env.string("ITEM_TYPE"),
        item_type_article: env.string("ITEM_TYPE_ARTICLE"),
        keep_selected_items: env.flag("KEEP_SELECTED_ITEMS")?,
        ask_for_count: env.flag("ASK_FOR_COUNT")?,
        count_offset: env.integer("COUNT_OFFSET")?,
        count_name: env.string("COUNT_NAME"),
        count_shown: env.flag("COUNT_SHOWN")?,
        ask_for_attributes: env.flag("ASK_FOR_ATTRIBUTES")?,
        attribute_list: env.json::<Vec<Attribute>>("ATTRIBUTE_LIST")?,
        default_attribute: env.json::<Attribute>("DEFAULT_ATTRIBUTE")?,
        attribute_name: env.string("ATTRIBUTE_NAME"),
        attribute_article: env.string("ATTRIBUTE_ARTICLE"),
    };

    Ok((overrides, env.keys))
}
