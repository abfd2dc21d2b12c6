use snafu::Snafu;
use std::path::PathBuf;
use toml::{de::Error as TomlDeError, ser::Error as TomlSerError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display(
        "Display list and data list must have the same number of elements (display: {display_len}, data: {data_len})"
    ))]
    MismatchedLengths { display_len: usize, data_len: usize },

    #[snafu(display("Invalid selection limit {limit}: use 0 for no limit or a positive number"))]
    InvalidLimit { limit: i64 },

    #[snafu(display("Prompt failed: {message}"))]
    Prompt { message: String },

    #[snafu(display("Scripted answer '{answer}' matches none of: {choices}"))]
    ScriptMismatch { answer: String, choices: String },

    #[snafu(display("Invalid argument: {message}"))]
    InvalidArgument { message: String },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    #[snafu(display("JSON serialization error: {source}"))]
    Json { source: serde_json::Error },

    #[snafu(display("Failed to access config file '{}': {source}", path.display()))]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse config file '{}': {source}", path.display()))]
    ConfigParse { path: PathBuf, source: TomlDeError },

    #[snafu(display("Failed to serialize configuration: {source}"))]
    ConfigSerialize { source: TomlSerError },

    #[snafu(display("Failed to parse item catalog '{}': {message}", path.display()))]
    CatalogParse { path: PathBuf, message: String },

    #[snafu(display("Preset '{name}' not found. Available presets: {available}"))]
    PresetNotFound { name: String, available: String },

    #[snafu(display("Environment variable '{key}' has an invalid value: '{value}'"))]
    InvalidEnvValue { key: String, value: String },
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json { source: error }
    }
}

impl Error {
    pub fn non_interactive(action: &str) -> Self {
        Error::InvalidArgument {
            message: format!(
                "{action} requires interactive input. Hint: rerun without --non-interactive or replay answers with --answers <FILE>."
            ),
        }
    }

    /// Construction-time input errors raised before any prompt is shown.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MismatchedLengths { .. } | Error::InvalidLimit { .. }
        )
    }
}
