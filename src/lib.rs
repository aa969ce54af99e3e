pub mod booking;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod reservations;
pub mod templates_structs;
pub mod ui;
