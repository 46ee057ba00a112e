//! Domain layer with core entities, validation rules and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Toast definitions.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Input validation.
pub mod validation;

pub use entities::{ButtonState, FormElement, FormField, SubmissionInput};
pub use errors::ReminderError;
pub use notification::{NotificationKind, NotificationRequest, NotifierTimings, ToastPhase};
pub use ports::{FormSurface, ReminderPort, ReminderResponse};
pub use validation::{FormValidationError, ValidationError, ValidationRules};
