//! Use case implementations.

mod submission_controller;

pub use submission_controller::{
    NETWORK_ERROR_MESSAGE, PendingSubmission, Preparation, REJECTED_MESSAGE, SUCCESS_MESSAGE,
    SettledSubmission, SubmissionController, SubmissionOutcome,
};
