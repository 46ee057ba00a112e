//! Application services.

/// Toast lifecycle management.
pub mod notifier;
/// Submit control state.
pub mod submit_button;

pub use notifier::{Notifier, NotifierEvent, Toast, ToastId};
pub use submit_button::{BusyGuard, SubmitButton};
