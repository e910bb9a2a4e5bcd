//! Configuration file management.
//!
//! An optional `config.toml` in the tool's data directory can pin the
//! snapshot location and the export directory. CLI flags win over the
//! file, the file wins over discovery.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Result};

/// Default export directory, relative to the working directory.
pub const DEFAULT_EXPORT_DIR: &str = "exports";

/// Tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Path overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Store snapshot to read instead of searching the usual locations.
    #[serde(default)]
    pub db_path: Option<PathBuf>,
    /// Directory export files are written into.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Directory holding the tool's own files.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".copilot-chat-export")
    }

    /// Export directory after applying the configured override.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.paths
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR))
    }
}

/// Load configuration from the default location, or defaults when absent.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_config() -> Result<AppConfig> {
    let config_path = AppConfig::default_data_dir().join("config.toml");

    if config_path.exists() {
        load_config_from_file(&config_path)
    } else {
        Ok(AppConfig::default())
    }
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse config file: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_parses_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.paths.db_path.is_none());
        assert_eq!(config.export_dir(), PathBuf::from(DEFAULT_EXPORT_DIR));
    }

    #[test]
    fn test_overrides_are_picked_up() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[paths]\ndb_path = \"/tmp/store.sqlite\"\nexport_dir = \"/tmp/out\"\n",
        )
        .unwrap();

        let loaded = load_config_from_file(&config_path).unwrap();

        assert_eq!(loaded.paths.db_path, Some(PathBuf::from("/tmp/store.sqlite")));
        assert_eq!(loaded.export_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[paths\n").unwrap();

        assert!(load_config_from_file(&config_path).is_err());
    }
}
