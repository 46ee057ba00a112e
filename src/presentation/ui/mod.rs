//! UI screens.

mod app;
mod form_screen;
mod notification_popup;

pub use app::{App, attach_surface};
pub use form_screen::{FormAction, FormScreen};
pub use notification_popup::NotificationPopup;
