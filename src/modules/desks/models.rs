use chrono::NaiveDate;
use deskbooker_core::Desk;
use serde::{Deserialize, Serialize};

/// Query for the availability endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// Day to check, `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// Desks free on a given day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub date: NaiveDate,
    pub desks: Vec<Desk>,
}
