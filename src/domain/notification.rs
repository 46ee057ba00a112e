//! Transient notification (toast) definitions.

use std::time::Duration;

/// Kind of toast, determines icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation succeeded.
    Success,
    /// Something went wrong.
    Error,
}

impl NotificationKind {
    /// Returns the icon shown in front of the message.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Error => "❌",
        }
    }
}

/// A request to display a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Message text.
    pub text: String,
    /// Toast kind.
    pub kind: NotificationKind,
}

impl NotificationRequest {
    /// Creates request.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Creates success request.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Success)
    }

    /// Creates error request.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, NotificationKind::Error)
    }
}

/// Lifecycle phase of the displayed toast.
///
/// `Empty` is represented by the absence of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Added to the surface, entry transition pending.
    Appearing,
    /// Fully shown.
    Visible,
    /// Exit transition running, removal pending.
    Disappearing,
}

/// Toast timing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifierTimings {
    /// Delay before the toast transitions into view.
    pub appear_delay: Duration,
    /// Time from `show` until auto-dismissal starts.
    pub duration: Duration,
    /// Time the exit transition is given before removal.
    pub remove_delay: Duration,
}

impl Default for NotifierTimings {
    fn default() -> Self {
        Self {
            appear_delay: Duration::from_millis(10),
            duration: Duration::from_millis(5000),
            remove_delay: Duration::from_millis(300),
        }
    }
}
