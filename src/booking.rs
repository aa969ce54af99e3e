//! The booking-backend boundary. The site never talks to a real booking
//! system; everything behind [`BookingBackend`] is an external collaborator.
//! [`RecordingBackend`] is the in-scope stand-in: it keeps the payloads in
//! memory and logs them, so a reservation request is observable without any
//! infrastructure.

use std::fmt;
use std::sync::Mutex;

use crate::reservations::ReservationRequest;

/// Returned by a backend that accepted a reservation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    /// Guest-facing booking reference, quoted in the confirmation notice.
    pub reference: String,
}

/// Failure taxonomy for a reservation hand-off. `Rejected` is final for the
/// submitted request (e.g. no table at that time); `Transient` is worth
/// retrying; `Internal` is a fault on the backend side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    Rejected(String),
    Transient(String),
    Internal(String),
}

impl BookingError {
    /// The notice shown to the guest. Entered values stay on the form in
    /// every case, so "try again" never means "type it all again".
    pub fn guest_notice(&self) -> String {
        match self {
            BookingError::Rejected(reason) => {
                format!("We could not take this booking: {reason}. Please pick another time or call us.")
            }
            BookingError::Transient(_) => {
                "We could not reach the booking system just now. Please try again in a moment.".to_string()
            }
            BookingError::Internal(_) => {
                "Something went wrong on our side. Please try again or call us directly.".to_string()
            }
        }
    }
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::Rejected(reason) => write!(f, "booking rejected: {reason}"),
            BookingError::Transient(detail) => write!(f, "booking backend unavailable: {detail}"),
            BookingError::Internal(detail) => write!(f, "booking backend error: {detail}"),
        }
    }
}

/// Receives validated reservation requests. Implementations decide whether
/// the table can actually be booked.
pub trait BookingBackend: Send + Sync {
    fn submit(&self, request: &ReservationRequest) -> Result<BookingConfirmation, BookingError>;
}

/// In-memory diagnostic backend: records every payload, logs it as JSON at
/// info level, and confirms with an incrementing `RYL-nnnn` reference.
#[derive(Default)]
pub struct RecordingBackend {
    ledger: Mutex<Vec<ReservationRequest>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn recorded(&self) -> Vec<ReservationRequest> {
        self.ledger.lock().expect("booking ledger poisoned").clone()
    }
}

impl BookingBackend for RecordingBackend {
    fn submit(&self, request: &ReservationRequest) -> Result<BookingConfirmation, BookingError> {
        let mut ledger = self
            .ledger
            .lock()
            .map_err(|_| BookingError::Internal("booking ledger poisoned".to_string()))?;
        ledger.push(request.clone());

        let reference = format!("RYL-{:04}", ledger.len());
        match serde_json::to_string(request) {
            Ok(json) => log::info!("Reservation request {reference} recorded: {json}"),
            Err(e) => log::warn!("Reservation request {reference} recorded, payload not serializable: {e}"),
        }
        Ok(BookingConfirmation { reference })
    }
}
