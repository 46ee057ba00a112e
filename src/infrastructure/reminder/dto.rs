//! Wire types of the scheduler endpoint.

use serde::Serialize;

use crate::domain::SubmissionInput;

/// Scheduler request body.
#[derive(Debug, Serialize)]
pub struct ScheduleRequest<'a> {
    /// Number of beers.
    pub beer_count: i64,
    /// Recipient address.
    pub email: &'a str,
}

impl<'a> From<&'a SubmissionInput> for ScheduleRequest<'a> {
    fn from(input: &'a SubmissionInput) -> Self {
        Self {
            beer_count: input.beer_count,
            email: &input.email,
        }
    }
}
