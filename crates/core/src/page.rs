//! Handler behind the "book a desk" page.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::models::{BookingId, BookingRequest, ResultCode};
use crate::processor::BookingProcessor;
use crate::validation::{BookingForm, DATE_KEY};

pub const NO_DESK_AVAILABLE: &str = "No desk available";

/// Validation errors keyed by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelState {
    errors: BTreeMap<String, Vec<String>>,
}

impl ModelState {
    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(key.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.errors.contains_key(key)
    }

    pub fn errors_for(&self, key: &str) -> &[String] {
        self.errors.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of keys carrying at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }
}

/// Details shown on the confirmation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub booking_id: BookingId,
    pub first_name: String,
    pub date: NaiveDate,
}

/// What the page does after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Show the form again with the current model state.
    Rerender,
    RedirectToConfirmation(Confirmation),
}

/// Page model for the booking form.
pub struct BookDeskPage<'a> {
    processor: &'a dyn BookingProcessor,
    pub booking_request: Option<BookingRequest>,
    pub model_state: ModelState,
}

impl<'a> BookDeskPage<'a> {
    pub fn new(processor: &'a dyn BookingProcessor) -> Self {
        Self {
            processor,
            booking_request: None,
            model_state: ModelState::default(),
        }
    }

    /// Validate `form` and keep the resulting request and errors.
    pub fn bind(&mut self, form: &BookingForm) {
        let (request, state) = form.to_request();
        self.booking_request = request;
        self.model_state = state;
    }

    pub fn on_submit(&mut self) -> Result<ActionOutcome, BookingError> {
        if !self.model_state.is_valid() {
            return Ok(ActionOutcome::Rerender);
        }

        let result = self.processor.process(self.booking_request.as_ref())?;

        match result.code {
            ResultCode::NoDesksAvailable => {
                self.model_state.add_error(DATE_KEY, NO_DESK_AVAILABLE);
                Ok(ActionOutcome::Rerender)
            }
            ResultCode::Success { booking_id } => {
                Ok(ActionOutcome::RedirectToConfirmation(Confirmation {
                    booking_id,
                    first_name: result.first_name,
                    date: result.date,
                }))
            }
        }
    }
}
