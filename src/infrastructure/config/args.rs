//! Command line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line overrides for the configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "bier-reminder",
    version,
    about = "Schedule beer reminders from your terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Scheduler endpoint URL.
    #[arg(long, env = "BIER_REMINDER_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    /// Toast display duration in milliseconds.
    #[arg(long)]
    pub toast_duration_ms: Option<u64>,
}
