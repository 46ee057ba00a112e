//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::validation::{MAX_BEER_COUNT, MIN_BEER_COUNT};
use crate::domain::{NotifierTimings, ValidationRules};
use crate::infrastructure::reminder::DEFAULT_API_URL;

use super::args::CliArgs;

const APP_NAME: &str = "bier-reminder";
const APP_QUALIFIER: &str = "de";
const APP_ORGANIZATION: &str = "bier";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Scheduler endpoint configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Toast timing configuration.
    #[serde(default)]
    pub notifications: NotificationsConfig,

    /// Input limits.
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Scheduler endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint receiving the POST.
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Transport timeout in seconds. Unset or `0` leaves requests unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Returns the request timeout, `None` when requests are unbounded.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            Some(0) => {
                warn!("Ignoring zero request timeout");
                None
            }
            secs => secs.map(Duration::from_secs),
        }
    }
}

/// Toast timing configuration, all values in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Time a toast stays on screen.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Delay before the entry transition.
    #[serde(default = "default_appear_delay_ms")]
    pub appear_delay_ms: u64,

    /// Time given to the exit transition.
    #[serde(default = "default_remove_delay_ms")]
    pub remove_delay_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            appear_delay_ms: default_appear_delay_ms(),
            remove_delay_ms: default_remove_delay_ms(),
        }
    }
}

impl NotificationsConfig {
    /// Converts the millisecond values into notifier timings.
    #[must_use]
    pub const fn timings(&self) -> NotifierTimings {
        NotifierTimings {
            appear_delay: Duration::from_millis(self.appear_delay_ms),
            duration: Duration::from_millis(self.duration_ms),
            remove_delay: Duration::from_millis(self.remove_delay_ms),
        }
    }
}

/// Beer count limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Smallest accepted beer count.
    #[serde(default = "default_min_beer_count")]
    pub min_beer_count: i64,

    /// Largest accepted beer count.
    #[serde(default = "default_max_beer_count")]
    pub max_beer_count: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_beer_count: MIN_BEER_COUNT,
            max_beer_count: MAX_BEER_COUNT,
        }
    }
}

impl ValidationConfig {
    /// Returns the limits, falling back to defaults when inverted.
    #[must_use]
    pub fn rules(&self) -> ValidationRules {
        if self.min_beer_count > self.max_beer_count {
            warn!(
                min = self.min_beer_count,
                max = self.max_beer_count,
                "Invalid beer count limits, using defaults"
            );
            return ValidationRules::default();
        }

        ValidationRules {
            min_beer_count: self.min_beer_count,
            max_beer_count: self.max_beer_count,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_duration_ms() -> u64 {
    5000
}

const fn default_appear_delay_ms() -> u64 {
    10
}

const fn default_remove_delay_ms() -> u64 {
    300
}

const fn default_min_beer_count() -> i64 {
    MIN_BEER_COUNT
}

const fn default_max_beer_count() -> i64 {
    MAX_BEER_COUNT
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = args.api_url {
            self.api.url = api_url;
        }
        if let Some(timeout) = args.request_timeout_secs {
            self.api.timeout_secs = Some(timeout);
        }
        if let Some(duration) = args.toast_duration_ms {
            self.notifications.duration_ms = duration;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("bier-reminder.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout(), None);
        assert_eq!(config.notifications.timings(), NotifierTimings::default());
        assert_eq!(config.validation.rules(), ValidationRules::default());
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [api]
            url = "http://localhost:8080/schedule"

            [notifications]
            duration_ms = 2000

            [validation]
            max_beer_count = 12
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api.url, "http://localhost:8080/schedule");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(
            config.notifications.timings().duration,
            Duration::from_secs(2)
        );
        assert_eq!(config.notifications.remove_delay_ms, 300);
        assert_eq!(config.validation.rules().max_beer_count, 12);
        assert_eq!(config.validation.rules().min_beer_count, 1);
    }

    #[test]
    fn test_inverted_limits_fall_back() {
        let config = ValidationConfig {
            min_beer_count: 10,
            max_beer_count: 2,
        };
        assert_eq!(config.rules(), ValidationRules::default());
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "bier-reminder",
            "--api-url",
            "http://127.0.0.1:9000/",
            "--log-level",
            "warn",
            "--toast-duration-ms",
            "1500",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.api.url, "http://127.0.0.1:9000/");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.notifications.duration_ms, 1500);
        assert_eq!(config.api.timeout_secs, None);
    }

    #[test]
    fn test_request_timeout_is_optional() {
        let mut config = AppConfig::default();
        config.merge_with_args(CliArgs::parse_from([
            "bier-reminder",
            "--request-timeout-secs",
            "12",
        ]));
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(12)));

        config.merge_with_args(CliArgs::parse_from([
            "bier-reminder",
            "--request-timeout-secs",
            "0",
        ]));
        assert_eq!(config.api.timeout(), None);

        let parsed: AppConfig = toml::from_str("[api]\ntimeout_secs = 0\n").unwrap();
        assert_eq!(parsed.api.timeout(), None);
    }
}
