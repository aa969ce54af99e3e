pub mod pages;
pub mod reservation_handlers;

use actix_session::Session;

/// Store a one-shot notice for the next page render.
pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

/// Read and clear the one-shot notice, if any.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
