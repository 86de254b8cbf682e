use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a physical desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeskId(pub u64);

impl fmt::Display for DeskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier assigned to a booking by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A desk booking attempt as submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// First name of the person booking
    pub first_name: String,
    /// Last name of the person booking
    pub last_name: String,
    /// Contact email
    pub email: String,
    /// Day the desk is wanted for
    pub date: NaiveDate,
}

/// A desk that can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desk {
    pub id: DeskId,
}

/// A booking about to be persisted. The store hands back its [`BookingId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub desk_id: DeskId,
}

impl Booking {
    /// Builds a booking of `desk_id` carrying the request's personal data.
    pub fn for_desk(request: &BookingRequest, desk_id: DeskId) -> Self {
        Self {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
            desk_id,
        }
    }
}

/// Terminal classification of a single booking attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ResultCode {
    Success { booking_id: BookingId },
    NoDesksAvailable,
}

/// Outcome of processing a [`BookingRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResult {
    #[serde(flatten)]
    pub code: ResultCode,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date: NaiveDate,
}

impl BookingResult {
    pub fn new(request: &BookingRequest, code: ResultCode) -> Self {
        Self {
            code,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
        }
    }

    /// The saved booking's id, present only on success.
    pub fn booking_id(&self) -> Option<BookingId> {
        match self.code {
            ResultCode::Success { booking_id } => Some(booking_id),
            ResultCode::NoDesksAvailable => None,
        }
    }
}
