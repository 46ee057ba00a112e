//! Application layer with services and use cases.

/// Application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{Notifier, NotifierEvent, SubmitButton};
pub use use_cases::{Preparation, SettledSubmission, SubmissionController, SubmissionOutcome};
