//! Validation of the raw booking form.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::BookingRequest;
use crate::page::ModelState;

pub const FIRST_NAME_KEY: &str = "booking_request.first_name";
pub const LAST_NAME_KEY: &str = "booking_request.last_name";
pub const EMAIL_KEY: &str = "booking_request.email";
pub const DATE_KEY: &str = "booking_request.date";

const KEY_PREFIX: &str = "booking_request";
const DATE_FORMAT: &str = "%Y-%m-%d";
const INVALID_EMAIL: &str = "The Email field is not a valid e-mail address.";
const INVALID_DATE: &str = "The Date field must be a date.";

/// Booking form fields exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct BookingForm {
    #[validate(length(min = 1, message = "The First Name field is required."))]
    pub first_name: String,

    #[validate(length(min = 1, message = "The Last Name field is required."))]
    pub last_name: String,

    #[validate(
        length(min = 1, message = "The Email field is required."),
        email(message = "The Email field is not a valid e-mail address."),
        custom(
            function = "dotted_domain",
            message = "The Email field is not a valid e-mail address."
        )
    )]
    pub email: String,

    #[validate(
        length(min = 1, message = "The Date field is required."),
        custom(function = "iso_date", message = "The Date field must be a date.")
    )]
    pub date: String,
}

impl BookingForm {
    /// Check every field and build a request when all of them pass.
    pub fn to_request(&self) -> (Option<BookingRequest>, ModelState) {
        let trimmed = self.trimmed();
        let mut state = ModelState::default();

        if let Err(errors) = Validate::validate(&trimmed) {
            for (field, field_errors) in errors.field_errors() {
                // One message per field: the first failing rule.
                if let Some(message) = field_errors.first().and_then(|e| e.message.as_ref()) {
                    state.add_error(format!("{KEY_PREFIX}.{field}"), message.to_string());
                }
            }
        }

        if !state.is_valid() {
            return (None, state);
        }

        match NaiveDate::parse_from_str(&trimmed.date, DATE_FORMAT) {
            Ok(date) => (
                Some(BookingRequest {
                    first_name: trimmed.first_name,
                    last_name: trimmed.last_name,
                    email: trimmed.email,
                    date,
                }),
                state,
            ),
            Err(_) => {
                state.add_error(DATE_KEY, INVALID_DATE);
                (None, state)
            }
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            date: self.date.trim().to_string(),
        }
    }
}

/// The `email` rule allows single-label domains; bookings need a dotted one.
fn dotted_domain(email: &str) -> Result<(), ValidationError> {
    match email.rsplit_once('@') {
        Some((_, domain)) if !domain.contains('.') => {
            Err(ValidationError::new("email_domain").with_message(Cow::Borrowed(INVALID_EMAIL)))
        }
        _ => Ok(()),
    }
}

/// Empty dates are reported by the `length` rule.
fn iso_date(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() || NaiveDate::parse_from_str(raw, DATE_FORMAT).is_ok() {
        Ok(())
    } else {
        Err(ValidationError::new("date").with_message(Cow::Borrowed(INVALID_DATE)))
    }
}
