//! Configuration file persistence.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Failures while locating or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform configuration directory is available.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,

    /// Reading or writing the file failed.
    #[error("config file {path}: {source}")]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The default configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The `config.toml` backing an [`AppConfig`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Resolves the file from an explicit path or the platform config dir.
    ///
    /// # Errors
    /// Returns `ConfigDirNotFound` when no path is given and the platform
    /// directory cannot be determined.
    pub fn new(path_override: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path_override {
            return Ok(Self::at(path));
        }

        let dir = AppConfig::default_config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
        Ok(Self::at(dir.join(CONFIG_FILE_NAME)))
    }

    /// Uses the given file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the configuration.
    ///
    /// A missing file is created with defaults. A file that does not parse is
    /// left untouched and defaults are used.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or the defaults cannot be
    /// written.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No config file, writing defaults");
            let config = AppConfig::default();
            self.save(&config)?;
            return Ok(config);
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| ConfigError::io(&self.path, e))?;

        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                debug!(path = %self.path.display(), "Config loaded");
                Ok(config)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Invalid config file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }

    /// Writes the configuration atomically, creating parent directories.
    ///
    /// # Errors
    /// Returns error if serialization or any file operation fails.
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;

        let mut temp_file =
            tempfile::NamedTempFile::new_in(parent).map_err(|e| ConfigError::io(parent, e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| ConfigError::io(&self.path, e))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| ConfigError::io(&self.path, e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join("bier-reminder").join(CONFIG_FILE_NAME));

        let config = store.load().unwrap();
        assert_eq!(config.notifications.duration_ms, 5000);
        assert!(store.path().exists());

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.api.url, config.api.url);
    }

    #[test]
    fn test_malformed_file_falls_back_untouched() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join(CONFIG_FILE_NAME));
        fs::write(store.path(), "invalid_toml = [").unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.validation.max_beer_count, 20);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "invalid_toml = [");
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "log_level = \"trace\"\n").unwrap();

        let store = ConfigStore::new(Some(&custom)).unwrap();
        assert_eq!(store.path(), custom.as_path());
        assert_eq!(store.load().unwrap().log_level, LogLevel::Trace);
    }

    #[test]
    fn test_save_round_trips_changes() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::at(dir.path().join(CONFIG_FILE_NAME));

        let mut config = AppConfig::default();
        config.validation.max_beer_count = 8;
        store.save(&config).unwrap();

        assert_eq!(store.load().unwrap().validation.max_beer_count, 8);
    }
}
