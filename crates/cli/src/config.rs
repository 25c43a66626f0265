//! Process configuration, read once from the environment.

use std::path::PathBuf;

use storefront_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const DATA_FILE_VAR: &str = "STOREFRONT_DATA_FILE";
pub const CATALOG_FILE_VAR: &str = "STOREFRONT_CATALOG_FILE";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STOREFRONT_LOG_FORMAT: {0}")]
    LogFormat(#[from] ParseLogFormatError),

    #[error("{0} is set but empty")]
    EmptyPath(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Key/value file holding the cart snapshot.
    pub data_file: PathBuf,
    /// Optional JSON catalog replacing the built-in demo products.
    pub catalog_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_file = match lookup(DATA_FILE_VAR) {
            Some(raw) => non_empty_path(raw, DATA_FILE_VAR)?,
            None => default_data_file(),
        };

        let catalog_file = lookup(CATALOG_FILE_VAR)
            .map(|raw| non_empty_path(raw, CATALOG_FILE_VAR))
            .transpose()?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            data_file,
            catalog_file,
            log_format,
        })
    }
}

fn non_empty_path(raw: String, var: &'static str) -> Result<PathBuf, ConfigError> {
    if raw.trim().is_empty() {
        return Err(ConfigError::EmptyPath(var));
    }
    Ok(PathBuf::from(raw))
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("storefront").join("storage.json"))
        .unwrap_or_else(|| PathBuf::from("storefront-storage.json"))
}
