//! Reservation form state: a single mutable record of raw input values with
//! partial updates per field, and a validation gate that either yields a
//! typed [`ReservationRequest`] or a list of problems, leaving the record
//! untouched either way.

use serde::{Deserialize, Serialize};

use super::request::ReservationRequest;
use super::validate;

fn default_party_size() -> String {
    "2".to_string()
}

/// Raw form record. All text inputs keep their raw value; only the consent
/// checkbox stores a boolean. Deserializes straight from the urlencoded form
/// body, with defaults for anything the browser omits (an unchecked checkbox
/// is simply absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default = "default_party_size")]
    pub party_size: String,
    #[serde(default)]
    pub gdpr_consent: bool,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            date: String::new(),
            time: String::new(),
            party_size: default_party_size(),
            gdpr_consent: false,
        }
    }
}

/// One input on the reservation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Date,
    Time,
    PartySize,
    GdprConsent,
}

impl ReservationForm {
    /// Merge one field into the record. No validation happens here; every
    /// raw value is accepted and every other field is left as-is.
    pub fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::Name => self.name = raw.to_string(),
            Field::Phone => self.phone = raw.to_string(),
            Field::Email => self.email = raw.to_string(),
            Field::Date => self.date = raw.to_string(),
            Field::Time => self.time = raw.to_string(),
            Field::PartySize => self.party_size = raw.to_string(),
            Field::GdprConsent => {
                // Browsers send "on" for a bare checkbox, ours carries value="true".
                self.gdpr_consent = matches!(raw, "on" | "true" | "1");
            }
        }
    }

    /// Back to the defaults: empty strings, party of two, consent withheld.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The validation gate. Required fields are name, phone, date and time;
    /// consent must be given; party size must parse to at least 1. Email is
    /// optional and never format-checked. On failure the full list of
    /// guest-facing messages comes back and the record is unchanged.
    pub fn to_request(&self) -> Result<ReservationRequest, Vec<String>> {
        let mut errors: Vec<String> = Vec::new();

        errors.extend(validate::validate_required(&self.name, "Full name"));
        errors.extend(validate::validate_required(&self.phone, "Phone number"));
        errors.extend(validate::validate_required(&self.date, "Date"));
        errors.extend(validate::validate_required(&self.time, "Time"));
        errors.extend(validate::validate_consent(self.gdpr_consent));

        // Parse the typed fields only once they are present, so a guest who
        // left the date blank sees "Date is required" rather than a format
        // complaint about an empty string.
        let date = if self.date.trim().is_empty() {
            None
        } else {
            match validate::parse_date(&self.date) {
                Ok(d) => Some(d),
                Err(msg) => {
                    errors.push(msg);
                    None
                }
            }
        };
        let time = if self.time.trim().is_empty() {
            None
        } else {
            match validate::parse_time(&self.time) {
                Ok(t) => Some(t),
                Err(msg) => {
                    errors.push(msg);
                    None
                }
            }
        };
        let party_size = match validate::parse_party_size(&self.party_size) {
            Ok(n) => Some(n),
            Err(msg) => {
                errors.push(msg);
                None
            }
        };

        let (Some(date), Some(time), Some(party_size)) = (date, time, party_size) else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        let email = self.email.trim();
        Ok(ReservationRequest {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: if email.is_empty() { None } else { Some(email.to_string()) },
            date,
            time,
            party_size,
            gdpr_consent: self.gdpr_consent,
        })
    }
}
