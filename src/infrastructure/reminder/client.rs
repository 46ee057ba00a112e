//! Reminder scheduler HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::ScheduleRequest;
use crate::domain::SubmissionInput;
use crate::domain::errors::ReminderError;
use crate::domain::ports::{ReminderPort, ReminderResponse};

/// Default scheduler endpoint.
pub const DEFAULT_API_URL: &str =
    "https://ygbwmqpviakzwgjjwuuw.supabase.co/functions/v1/schedule_reminders";

const USER_AGENT: &str = concat!("bier-reminder/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the scheduling endpoint.
pub struct ReminderClient {
    client: Client,
    url: String,
}

impl ReminderClient {
    /// Creates client for the default endpoint.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ReminderError> {
        Self::with_url(DEFAULT_API_URL, None)
    }

    /// Creates client for a custom endpoint.
    ///
    /// Without a timeout a request runs until the transport gives up.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_url(
        url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ReminderError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| ReminderError::client_setup(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn transport_error(e: &reqwest::Error) -> ReminderError {
    if e.is_timeout() {
        ReminderError::transport("request timed out")
    } else if e.is_connect() {
        ReminderError::transport("failed to connect to scheduler")
    } else {
        ReminderError::transport(e.to_string())
    }
}

#[async_trait]
impl ReminderPort for ReminderClient {
    async fn schedule_reminders(
        &self,
        input: &SubmissionInput,
    ) -> Result<ReminderResponse, ReminderError> {
        debug!(beer_count = input.beer_count, "Sending scheduling request");

        let response = self
            .client
            .post(&self.url)
            .json(&ScheduleRequest::from(input))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "API request failed");
                transport_error(&e)
            })?;

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, status, "Failed to read scheduler response body");
                String::new()
            }
        };

        debug!(status, "Scheduler responded");

        Ok(ReminderResponse::new(status, body))
    }
}
