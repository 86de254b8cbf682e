use std::sync::Arc;

use crate::error::BookingError;
use crate::models::{Booking, BookingRequest, BookingResult, ResultCode};
use crate::ports::{DeskBookingRepository, DeskRepository};

/// Turns a booking request into a booking result.
pub trait BookingProcessor: Send + Sync {
    /// Book the first desk available on the request's date.
    ///
    /// Fails with [`BookingError::MissingArgument`] when `request` is absent
    /// and with [`BookingError::Repository`] when a store call fails.
    fn process(&self, request: Option<&BookingRequest>) -> Result<BookingResult, BookingError>;
}

/// [`BookingProcessor`] backed by a desk inventory and a booking store.
pub struct DeskBookingProcessor {
    desks: Arc<dyn DeskRepository>,
    bookings: Arc<dyn DeskBookingRepository>,
}

impl DeskBookingProcessor {
    pub fn new(desks: Arc<dyn DeskRepository>, bookings: Arc<dyn DeskBookingRepository>) -> Self {
        Self { desks, bookings }
    }
}

impl BookingProcessor for DeskBookingProcessor {
    fn process(&self, request: Option<&BookingRequest>) -> Result<BookingResult, BookingError> {
        let request = request.ok_or(BookingError::MissingArgument { param: "request" })?;

        let available = self.desks.available_desks(request.date)?;

        // First desk in store order wins.
        let code = match available.first() {
            Some(desk) => {
                let booking = Booking::for_desk(request, desk.id);
                let booking_id = self.bookings.save(&booking)?;

                tracing::info!(
                    booking_id = %booking_id,
                    desk_id = %desk.id,
                    date = %request.date,
                    "desk booked"
                );
                ResultCode::Success { booking_id }
            }
            None => {
                tracing::info!(date = %request.date, "no desk available");
                ResultCode::NoDesksAvailable
            }
        };

        Ok(BookingResult::new(request, code))
    }
}
