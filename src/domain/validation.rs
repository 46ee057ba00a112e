//! Form input validation.
//!
//! Checks are pure and report a single actionable error at a time. The beer
//! count is always checked before the email address.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::entities::{FormField, SubmissionInput};

/// Default lower bound for the beer count.
pub const MIN_BEER_COUNT: i64 = 1;
/// Default upper bound for the beer count.
pub const MAX_BEER_COUNT: i64 = 20;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// User-correctable input problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Beer count is not a number.
    #[error("Bitte gib eine gültige Anzahl an Bieren ein!")]
    InvalidNumber,

    /// Beer count below the minimum.
    #[error("Bitte gib mindestens {min} Bier an!")]
    TooLow {
        /// Smallest accepted count.
        min: i64,
    },

    /// Beer count above the maximum.
    #[error("Bitte gib maximal {max} Biere an!")]
    TooHigh {
        /// Largest accepted count.
        max: i64,
    },

    /// Email field is empty.
    #[error("Bitte gib eine Email-Adresse ein!")]
    Missing,

    /// Email does not look like an address.
    #[error("Bitte gib eine gültige Email-Adresse ein!")]
    MalformedAddress,
}

/// Failed form validation with the field that should receive focus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct FormValidationError {
    /// Field that should receive focus.
    pub field: FormField,
    /// The failed check.
    pub error: ValidationError,
}

/// Beer count limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    /// Smallest accepted beer count.
    pub min_beer_count: i64,
    /// Largest accepted beer count.
    pub max_beer_count: i64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_beer_count: MIN_BEER_COUNT,
            max_beer_count: MAX_BEER_COUNT,
        }
    }
}

impl ValidationRules {
    /// Checks the beer count against the configured limits.
    ///
    /// # Errors
    /// Returns error if the count is absent or out of range.
    pub fn validate_beer_count(&self, beer_count: Option<i64>) -> Result<(), ValidationError> {
        let Some(count) = beer_count else {
            return Err(ValidationError::InvalidNumber);
        };

        if count < self.min_beer_count {
            return Err(ValidationError::TooLow {
                min: self.min_beer_count,
            });
        }

        if count > self.max_beer_count {
            return Err(ValidationError::TooHigh {
                max: self.max_beer_count,
            });
        }

        Ok(())
    }

    /// Validates both fields, beer count first.
    ///
    /// # Errors
    /// Returns the first failing check together with its field.
    pub fn validate_form(
        &self,
        beer_count: Option<i64>,
        email: &str,
    ) -> Result<SubmissionInput, FormValidationError> {
        self.validate_beer_count(beer_count)
            .map_err(|error| FormValidationError {
                field: FormField::BeerCount,
                error,
            })?;

        validate_email(email).map_err(|error| FormValidationError {
            field: FormField::Email,
            error,
        })?;

        let beer_count = beer_count.ok_or(FormValidationError {
            field: FormField::BeerCount,
            error: ValidationError::InvalidNumber,
        })?;

        Ok(SubmissionInput::new(beer_count, email))
    }
}

/// Checks the beer count against the default limits.
///
/// # Errors
/// Returns error if the count is absent or out of range.
pub fn validate_beer_count(beer_count: Option<i64>) -> Result<(), ValidationError> {
    ValidationRules::default().validate_beer_count(beer_count)
}

/// Shallow email check, not RFC compliant.
///
/// # Errors
/// Returns error if the address is empty or malformed.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::Missing);
    }

    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::MalformedAddress);
    }

    Ok(())
}

/// Validates both fields against the default limits.
///
/// # Errors
/// Returns the first failing check together with its field.
pub fn validate_form(
    beer_count: Option<i64>,
    email: &str,
) -> Result<SubmissionInput, FormValidationError> {
    ValidationRules::default().validate_form(beer_count, email)
}

/// Parses the raw beer count field.
///
/// Leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit. Returns `None` when no digit is present. Values that do
/// not fit saturate.
#[must_use]
pub fn parse_beer_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
