//! Domain error types.

mod reminder_error;

pub use reminder_error::ReminderError;
