//! Field-level checks for the reservation form. Each helper returns
//! `Some(message)` on failure so callers can collect every problem at once.

use chrono::{NaiveDate, NaiveTime};

/// Validate a required text field (non-empty after trimming).
pub fn validate_required(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    None
}

/// Validate the GDPR consent checkbox: must be ticked.
pub fn validate_consent(consented: bool) -> Option<String> {
    if !consented {
        return Some("Consent is required so we can contact you about this reservation".to_string());
    }
    None
}

/// Parse a calendar date from an HTML date input (YYYY-MM-DD).
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| "Date must be a valid calendar date".to_string())
}

/// Parse a time-of-day from an HTML time input. Browsers send either
/// HH:MM or HH:MM:SS depending on the step attribute.
pub fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| "Time must be a valid time of day".to_string())
}

/// Parse the party size. Minimum of one guest is enforced; there is no
/// upper bound.
pub fn parse_party_size(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err("Party size must be at least 1".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_whitespace() {
        assert!(validate_required("   ", "Full name").is_some());
        assert!(validate_required("Ann", "Full name").is_none());
    }

    #[test]
    fn time_accepts_both_browser_formats() {
        assert!(parse_time("19:00").is_ok());
        assert!(parse_time("19:00:30").is_ok());
        assert!(parse_time("quarter past eight").is_err());
    }

    #[test]
    fn party_size_minimum_is_one() {
        assert_eq!(parse_party_size("4"), Ok(4));
        assert!(parse_party_size("0").is_err());
        assert!(parse_party_size("-2").is_err());
        assert!(parse_party_size("a few").is_err());
    }
}
