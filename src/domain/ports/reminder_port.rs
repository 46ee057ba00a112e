//! Reminder scheduling port definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::SubmissionInput;
use crate::domain::errors::ReminderError;

/// Completed HTTP exchange with the scheduler, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body, possibly empty.
    pub body: String,
}

impl ReminderResponse {
    /// Creates response from status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Parses the body as JSON, `None` if empty or malformed.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        if self.body.trim().is_empty() {
            return None;
        }
        serde_json::from_str(&self.body).ok()
    }
}

/// Port for the remote reminder scheduler.
#[async_trait]
pub trait ReminderPort: Send + Sync {
    /// Sends one scheduling request.
    ///
    /// # Errors
    /// Returns error only if the exchange did not complete.
    async fn schedule_reminders(
        &self,
        input: &SubmissionInput,
    ) -> Result<ReminderResponse, ReminderError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Debug, Clone)]
    enum MockReply {
        Respond(ReminderResponse),
        Fail(String),
    }

    /// Mock reminder port recording every request.
    pub struct MockReminderPort {
        reply: MockReply,
        pub requests: Mutex<Vec<SubmissionInput>>,
    }

    impl MockReminderPort {
        /// Creates mock answering with the given status and body.
        pub fn responding(status: u16, body: &str) -> Self {
            Self::with_reply(MockReply::Respond(ReminderResponse::new(status, body)))
        }

        /// Creates mock failing at transport level.
        pub fn failing(message: &str) -> Self {
            Self::with_reply(MockReply::Fail(message.to_string()))
        }

        fn with_reply(reply: MockReply) -> Self {
            Self {
                reply,
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Returns number of requests received.
        pub fn request_count(&self) -> usize {
            self.requests.lock().len()
        }
    }

    #[async_trait]
    impl ReminderPort for MockReminderPort {
        async fn schedule_reminders(
            &self,
            input: &SubmissionInput,
        ) -> Result<ReminderResponse, ReminderError> {
            self.requests.lock().push(input.clone());
            match self.reply.clone() {
                MockReply::Respond(response) => Ok(response),
                MockReply::Fail(message) => Err(ReminderError::transport(message)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(ReminderResponse::new(200, "").is_success());
        assert!(ReminderResponse::new(204, "").is_success());
        assert!(!ReminderResponse::new(302, "").is_success());
        assert!(!ReminderResponse::new(404, "").is_success());
        assert!(!ReminderResponse::new(500, "").is_success());
    }

    #[test]
    fn test_json_body_is_optional() {
        assert!(ReminderResponse::new(200, "").json().is_none());
        assert!(ReminderResponse::new(200, "not json").json().is_none());

        let parsed = ReminderResponse::new(200, r#"{"scheduled": 5}"#).json();
        assert_eq!(parsed, Some(serde_json::json!({"scheduled": 5})));
    }
}
