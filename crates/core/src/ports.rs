//! Storage collaborators consumed by the booking processor.
//!
//! Adapters implement these traits to back the processor with a concrete
//! store. The bundled implementation lives in `deskbooker-db`.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Booking, BookingId, Desk, DeskId};

/// Errors raised by repository adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached or is in a broken state.
    #[error("desk store unavailable: {message}")]
    Unavailable { message: String },
    /// The desk was taken between the availability query and the save.
    #[error("desk {desk_id} is already booked on {date}")]
    DeskAlreadyBooked { desk_id: DeskId, date: NaiveDate },
}

impl RepositoryError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Desk inventory lookup.
#[cfg_attr(test, mockall::automock)]
pub trait DeskRepository: Send + Sync {
    /// Desks free on `date`, in the store's order.
    ///
    /// Returns an empty vector when nothing is free; that is not an error.
    fn available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>, RepositoryError>;
}

/// Booking persistence.
#[cfg_attr(test, mockall::automock)]
pub trait DeskBookingRepository: Send + Sync {
    /// Persist `booking` and return the identifier the store assigned.
    fn save(&self, booking: &Booking) -> Result<BookingId, RepositoryError>;
}
