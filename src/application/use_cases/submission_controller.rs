//! Submission workflow: validate, schedule, react.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::application::services::{BusyGuard, Notifier, SubmitButton};
use crate::domain::errors::ReminderError;
use crate::domain::ports::{FormSurface, ReminderPort, ReminderResponse};
use crate::domain::validation::parse_beer_count;
use crate::domain::{FormField, SubmissionInput, ValidationRules};

/// Shown after the scheduler accepted the request.
pub const SUCCESS_MESSAGE: &str = "Reminder gestartet! Viel Spaß beim Trinken 🍺";
/// Shown when the scheduler answered with a non-2xx status.
pub const REJECTED_MESSAGE: &str = "Fehler beim Starten des Reminders. Bitte versuche es erneut.";
/// Shown when the request never completed.
pub const NETWORK_ERROR_MESSAGE: &str = "Netzwerkfehler. Bitte überprüfe deine Internetverbindung.";

const UNKNOWN_ERROR_BODY: &str = "Unbekannter Fehler";

/// How a submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Trigger was disabled, nothing happened.
    Ignored,
    /// Input rejected, focus moved to the field.
    Invalid(FormField),
    /// Scheduler accepted the request.
    Scheduled,
    /// Scheduler answered with a failure status.
    Rejected {
        /// HTTP status code.
        status: u16,
    },
    /// Request did not complete.
    NetworkError,
}

/// Result of the synchronous part of a submission.
#[derive(Debug)]
pub enum Preparation {
    /// Input is valid and the button is busy.
    Ready(PendingSubmission),
    /// Attempt ended before any request.
    Finished(SubmissionOutcome),
}

/// Validated submission holding the busy state.
#[derive(Debug)]
pub struct PendingSubmission {
    input: SubmissionInput,
    busy: BusyGuard,
}

impl PendingSubmission {
    /// Returns the validated input.
    #[must_use]
    pub fn input(&self) -> &SubmissionInput {
        &self.input
    }

    /// Performs the request. The busy state travels with the result.
    pub async fn send(self, reminders: &dyn ReminderPort) -> SettledSubmission {
        let result = reminders.schedule_reminders(&self.input).await;
        SettledSubmission {
            result,
            busy: self.busy,
        }
    }
}

/// Request that has resolved or failed.
#[derive(Debug)]
pub struct SettledSubmission {
    result: Result<ReminderResponse, ReminderError>,
    busy: BusyGuard,
}

/// Orchestrates validation, the scheduler call and the user feedback.
pub struct SubmissionController {
    notifier: Notifier,
    button: SubmitButton,
    reminders: Arc<dyn ReminderPort>,
    rules: ValidationRules,
}

impl SubmissionController {
    /// Creates controller.
    #[must_use]
    pub fn new(
        notifier: Notifier,
        button: SubmitButton,
        reminders: Arc<dyn ReminderPort>,
        rules: ValidationRules,
    ) -> Self {
        Self {
            notifier,
            button,
            reminders,
            rules,
        }
    }

    /// Returns the toast manager.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Returns the toast manager for applying timer events.
    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Returns the submit control state.
    #[must_use]
    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Returns the scheduler port, for running requests off the UI loop.
    #[must_use]
    pub fn reminders(&self) -> Arc<dyn ReminderPort> {
        Arc::clone(&self.reminders)
    }

    /// Reads and validates the form, then enters the busy state.
    ///
    /// On invalid input an error toast is shown and focus moves to the
    /// failing field; the button is left untouched.
    pub fn prepare(&mut self, surface: &mut dyn FormSurface) -> Preparation {
        if !self.button.is_enabled() {
            debug!("Submit ignored while a request is in flight");
            return Preparation::Finished(SubmissionOutcome::Ignored);
        }

        let beer_count = parse_beer_count(&surface.read_field(FormField::BeerCount));
        let email = surface.read_field(FormField::Email).trim().to_string();

        let input = match self.rules.validate_form(beer_count, &email) {
            Ok(input) => input,
            Err(invalid) => {
                debug!(field = ?invalid.field, error = %invalid, "Form input rejected");
                self.notifier.error(invalid.to_string());
                surface.focus(invalid.field);
                return Preparation::Finished(SubmissionOutcome::Invalid(invalid.field));
            }
        };

        let Some(busy) = self.button.try_acquire() else {
            return Preparation::Finished(SubmissionOutcome::Ignored);
        };

        Preparation::Ready(PendingSubmission { input, busy })
    }

    /// Reacts to a settled request and releases the busy state.
    pub fn settle(
        &mut self,
        settled: SettledSubmission,
        surface: &mut dyn FormSurface,
    ) -> SubmissionOutcome {
        let SettledSubmission { result, busy } = settled;

        let outcome = match result {
            Ok(response) if response.is_success() => {
                if let Some(body) = response.json() {
                    debug!(%body, "Scheduler response");
                }
                info!(status = response.status, "Reminders scheduled");
                self.notifier.success(SUCCESS_MESSAGE);
                surface.clear_fields();
                SubmissionOutcome::Scheduled
            }
            Ok(response) => {
                let detail = if response.body.is_empty() {
                    UNKNOWN_ERROR_BODY
                } else {
                    response.body.as_str()
                };
                error!(status = response.status, body = %detail, "Scheduler rejected request");
                self.notifier.error(REJECTED_MESSAGE);
                SubmissionOutcome::Rejected {
                    status: response.status,
                }
            }
            Err(e) => {
                if e.is_transport() {
                    error!(error = %e, "Network error");
                } else {
                    warn!(error = %e, "Request could not be sent");
                }
                self.notifier.error(NETWORK_ERROR_MESSAGE);
                SubmissionOutcome::NetworkError
            }
        };

        drop(busy);
        outcome
    }

    /// Runs a full submission attempt.
    pub async fn submit(&mut self, surface: &mut dyn FormSurface) -> SubmissionOutcome {
        let pending = match self.prepare(surface) {
            Preparation::Ready(pending) => pending,
            Preparation::Finished(outcome) => return outcome,
        };

        let reminders = self.reminders();
        let settled = pending.send(reminders.as_ref()).await;
        self.settle(settled, surface)
    }
}
