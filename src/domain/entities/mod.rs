//! Domain entity definitions.

mod submission;

pub use submission::{ButtonState, FormElement, FormField, SubmissionInput};
