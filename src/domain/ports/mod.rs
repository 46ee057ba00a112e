mod form_surface_port;
mod reminder_port;

pub use form_surface_port::FormSurface;
pub use reminder_port::{ReminderPort, ReminderResponse};
