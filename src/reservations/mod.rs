pub mod form;
pub mod request;
pub mod validate;

pub use form::{Field, ReservationForm};
pub use request::ReservationRequest;
