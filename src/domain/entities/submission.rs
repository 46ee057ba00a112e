//! Submission form entities.

use std::fmt;

/// Input fields that can receive focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Numeric beer count input.
    BeerCount,
    /// Email address input.
    Email,
}

impl FormField {
    /// Returns the other field, used for focus cycling.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::BeerCount => Self::Email,
            Self::Email => Self::BeerCount,
        }
    }

    /// Returns the element backing this field.
    #[must_use]
    pub const fn element(self) -> FormElement {
        match self {
            Self::BeerCount => FormElement::BeerCountInput,
            Self::Email => FormElement::EmailInput,
        }
    }
}

/// Elements the rendering surface has to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormElement {
    /// The form container.
    Form,
    /// The submit control.
    SubmitButton,
    /// Label inside the submit control.
    ButtonLabel,
    /// Beer count input.
    BeerCountInput,
    /// Email input.
    EmailInput,
}

impl FormElement {
    /// All required elements, in initialization check order.
    pub const REQUIRED: [Self; 5] = [
        Self::Form,
        Self::SubmitButton,
        Self::ButtonLabel,
        Self::BeerCountInput,
        Self::EmailInput,
    ];
}

impl fmt::Display for FormElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Form => "form",
            Self::SubmitButton => "submit button",
            Self::ButtonLabel => "button label",
            Self::BeerCountInput => "beer count input",
            Self::EmailInput => "email input",
        };
        f.write_str(name)
    }
}

/// Validated values sent to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    /// Number of beers, within the configured limits.
    pub beer_count: i64,
    /// Trimmed email address.
    pub email: String,
}

impl SubmissionInput {
    /// Creates input from validated values.
    #[must_use]
    pub fn new(beer_count: i64, email: impl Into<String>) -> Self {
        Self {
            beer_count,
            email: email.into(),
        }
    }
}

/// Submit control state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonState {
    /// Enabled, accepts submits.
    #[default]
    Idle,
    /// A request is in flight.
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(FormField::BeerCount.next(), FormField::Email);
        assert_eq!(FormField::Email.next(), FormField::BeerCount);
    }

    #[test]
    fn test_field_elements_are_required() {
        for field in [FormField::BeerCount, FormField::Email] {
            assert!(FormElement::REQUIRED.contains(&field.element()));
        }
    }
}
