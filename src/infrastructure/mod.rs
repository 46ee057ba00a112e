//! Infrastructure layer with adapters for external services.

/// Application configuration.
pub mod config;
/// Reminder scheduler client.
pub mod reminder;

pub use config::{AppConfig, CliArgs, ConfigStore, LogLevel};
pub use reminder::ReminderClient;
