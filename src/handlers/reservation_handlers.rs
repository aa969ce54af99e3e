use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::booking::BookingBackend;
use crate::errors::{AppError, render};
use crate::handlers::set_flash;
use crate::reservations::ReservationForm;
use crate::templates_structs::IndexTemplate;

const VALIDATION_NOTICE: &str =
    "Please fill in all required fields and accept the consent terms.";

/// `POST /reservations`. Validation failure re-renders the page with the
/// entered values and the list of problems; nothing is sent to the backend.
/// A backend failure also preserves the entered values. Success flashes a
/// confirmation and redirects, so the follow-up GET shows a fresh form.
pub async fn submit(
    backend: web::Data<dyn BookingBackend>,
    session: Session,
    form: web::Form<ReservationForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let request = match form.to_request() {
        Ok(request) => request,
        Err(errors) => {
            let tmpl = IndexTemplate::build(
                false,
                false,
                form,
                errors,
                Some(VALIDATION_NOTICE.to_string()),
                None,
            );
            return render(tmpl);
        }
    };

    match backend.submit(&request) {
        Ok(confirmation) => {
            log::info!("Reservation accepted, reference {}", confirmation.reference);
            set_flash(
                &session,
                &format!(
                    "Thank you! Your reservation request has been received (reference {}). \
                     We will contact you shortly to confirm.",
                    confirmation.reference
                ),
            );
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/#reservations"))
                .finish())
        }
        Err(err) => {
            log::warn!("Reservation hand-off failed: {err}");
            let tmpl = IndexTemplate::build(
                false,
                false,
                form,
                Vec::new(),
                Some(err.guest_notice()),
                None,
            );
            render(tmpl)
        }
    }
}
