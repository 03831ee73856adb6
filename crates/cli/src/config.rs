//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SNEAKERHUB_DATA_DIR` - Directory holding persisted state (default: `.sneakerhub`)
//! - `SNEAKERHUB_CATALOG` - Path to a JSON product catalog (default: built-in catalog)
//! - `SNEAKERHUB_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)
//! - `RUST_LOG` - Tracing filter directives (default: `warn`)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// File inside the data directory that backs the side channel.
const STORAGE_FILE: &str = "storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// SneakerHub CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Directory for persisted session and cart state
    pub data_dir: PathBuf,
    /// Optional catalog override
    pub catalog_path: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable has an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = get("SNEAKERHUB_DATA_DIR")
            .map_or_else(|| PathBuf::from(".sneakerhub"), PathBuf::from);
        let catalog_path = get("SNEAKERHUB_CATALOG").map(PathBuf::from);
        let log_format = get("SNEAKERHUB_LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("SNEAKERHUB_LOG_FORMAT".to_string(), e))?
            .unwrap_or_default();

        Ok(Self {
            data_dir,
            catalog_path,
            log_format,
        })
    }

    /// Path of the file backing the side channel.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ShopConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".sneakerhub"));
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.storage_path(), PathBuf::from(".sneakerhub/storage.json"));
    }

    #[test]
    fn test_overrides() {
        let config = ShopConfig::from_lookup(lookup(&[
            ("SNEAKERHUB_DATA_DIR", "/tmp/shop"),
            ("SNEAKERHUB_CATALOG", "catalog.json"),
            ("SNEAKERHUB_LOG_FORMAT", "JSON"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = ShopConfig::from_lookup(lookup(&[("SNEAKERHUB_DATA_DIR", "  ")])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".sneakerhub"));
    }

    #[test]
    fn test_invalid_log_format() {
        let err = ShopConfig::from_lookup(lookup(&[("SNEAKERHUB_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref var, _) if var == "SNEAKERHUB_LOG_FORMAT"));
    }
}
