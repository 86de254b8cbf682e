//! Desk booking domain for DeskBooker.
//!
//! The [`processor`] decides whether a request can be booked and the
//! [`page`] handler turns that decision into a re-render or redirect.
//! Storage is reached only through the traits in [`ports`].

pub mod error;
pub mod models;
pub mod page;
pub mod ports;
pub mod processor;
pub mod validation;

pub use error::BookingError;
pub use models::{Booking, BookingId, BookingRequest, BookingResult, Desk, DeskId, ResultCode};
pub use page::{ActionOutcome, BookDeskPage, Confirmation, ModelState};
pub use ports::{DeskBookingRepository, DeskRepository, RepositoryError};
pub use processor::{BookingProcessor, DeskBookingProcessor};
pub use validation::BookingForm;
