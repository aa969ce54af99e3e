use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// The structured payload handed to the booking backend once a submission
/// passes client validation. Created per attempt, discarded after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationRequest {
    pub name: String,
    pub phone: String,
    /// Optional and never checked for format.
    pub email: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub party_size: u32,
    pub gdpr_consent: bool,
}
