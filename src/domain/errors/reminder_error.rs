//! Reminder scheduling error types.

use thiserror::Error;

/// Failures that prevent a scheduling request from completing.
///
/// Non-2xx responses are not errors at this level; they are returned as
/// responses for the caller to inspect.
#[derive(Debug, Error)]
pub enum ReminderError {
    /// The request did not reach the scheduler or got no answer.
    #[error("network error while scheduling reminders: {message}")]
    Transport {
        /// Error description.
        message: String,
    },

    /// The HTTP client could not be built.
    #[error("failed to create HTTP client: {message}")]
    ClientSetup {
        /// Error description.
        message: String,
    },
}

impl ReminderError {
    /// Creates transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates client setup error.
    #[must_use]
    pub fn client_setup(message: impl Into<String>) -> Self {
        Self::ClientSetup {
            message: message.into(),
        }
    }

    /// Returns whether the request never completed.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_display() {
        let err = ReminderError::transport("connection refused");
        assert!(err.is_transport());
        assert_eq!(
            err.to_string(),
            "network error while scheduling reminders: connection refused"
        );
    }

    #[test]
    fn test_client_setup_is_not_transport() {
        assert!(!ReminderError::client_setup("tls backend").is_transport());
    }
}
