//! Shared fixtures for the reservation tests.

use royl::reservations::ReservationForm;

pub const NAME: &str = "Ann";
pub const PHONE: &str = "555-1234";
pub const DATE: &str = "2025-12-01";
pub const TIME: &str = "19:00";

/// A form record with every required field present and consent given.
pub fn filled_form() -> ReservationForm {
    ReservationForm {
        name: NAME.to_string(),
        phone: PHONE.to_string(),
        email: String::new(),
        date: DATE.to_string(),
        time: TIME.to_string(),
        party_size: "4".to_string(),
        gdpr_consent: true,
    }
}

/// The same record as urlencoded key/value pairs, the way a browser posts it.
pub fn filled_form_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", NAME),
        ("phone", PHONE),
        ("email", ""),
        ("date", DATE),
        ("time", TIME),
        ("party_size", "4"),
        ("gdpr_consent", "true"),
    ]
}
