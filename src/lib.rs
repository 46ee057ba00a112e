//! Bier Reminder - a small terminal form that schedules beer reminders.
//!
//! The form collects a beer count and an email address, validates them, and
//! asks a remote scheduling endpoint to send reminders, reporting the result
//! through transient toast notifications.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the submission controller and UI services.
pub mod application;
/// Domain layer containing entities, validation, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing the HTTP client and configuration.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "bier-reminder";
