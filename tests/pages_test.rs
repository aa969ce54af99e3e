//! HTTP-level tests: render-from-state for the menu overlay, the reservation
//! submission flow, and the 404 fallback.

mod common;

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpResponse, test, web};
use regex::Regex;

use royl::booking::{BookingBackend, BookingConfirmation, BookingError, RecordingBackend};
use royl::handlers;
use royl::reservations::ReservationRequest;

macro_rules! test_app {
    ($backend:expr) => {
        test::init_service(
            App::new()
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                        .cookie_secure(false)
                        .build(),
                )
                .app_data(web::Data::from($backend as Arc<dyn BookingBackend>))
                .route("/", web::get().to(handlers::pages::index))
                .route(
                    "/reservations",
                    web::post().to(handlers::reservation_handlers::submit),
                )
                .default_service(web::to(|| async {
                    HttpResponse::NotFound().body("Not Found")
                })),
        )
        .await
    };
}

#[actix_rt::test]
async fn landing_page_renders_with_menu_closed() {
    let backend = Arc::new(RecordingBackend::new());
    let app = test_app!(backend);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();

    assert!(html.contains("ROY_L"));
    assert!(html.contains("Book Your Royal Table"));
    assert!(!html.contains("scroll-locked"));
    assert!(html.contains(r#"class="mobile-menu closed""#));

    // Gallery placeholders are parameterized by ratio and brand colors.
    let placeholder = Regex::new(r"https://placehold\.co/600x\d+/0B0B0B/D4AF37").unwrap();
    assert!(placeholder.is_match(html));
}

#[actix_rt::test]
async fn open_menu_variant_locks_page_scroll() {
    let backend = Arc::new(RecordingBackend::new());
    let app = test_app!(backend);

    let req = test::TestRequest::get().uri("/?menu=open").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();

    assert!(html.contains(r#"<body class="scroll-locked">"#));
    assert!(html.contains(r#"class="mobile-menu open""#));
    // Every close action is a link to a URL without the menu parameter.
    assert!(html.contains(r#"class="close-button" href="/""#));
}

#[actix_rt::test]
async fn valid_submission_is_recorded_and_redirected() {
    let backend = Arc::new(RecordingBackend::new());
    let app = test_app!(backend.clone());

    let req = test::TestRequest::post()
        .uri("/reservations")
        .set_form(common::filled_form_pairs())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    assert_eq!(location, "/#reservations");

    let recorded = backend.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].name, "Ann");
    assert_eq!(recorded[0].party_size, 4);
}

#[actix_rt::test]
async fn invalid_submission_preserves_entered_values() {
    let backend = Arc::new(RecordingBackend::new());
    let app = test_app!(backend.clone());

    // Same payload minus the name, urlencoded the way a browser would send it.
    let pairs: Vec<(&str, &str)> = common::filled_form_pairs()
        .into_iter()
        .map(|(k, v)| if k == "name" { (k, "") } else { (k, v) })
        .collect();
    let body = serde_urlencoded::to_string(&pairs).unwrap();

    let req = test::TestRequest::post()
        .uri("/reservations")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("Please fill in all required fields"));
    assert!(html.contains("Full name is required"));
    // Entered values stay on the form.
    assert!(html.contains(common::PHONE));
    assert!(html.contains(common::DATE));

    // Nothing was transmitted to the backend.
    assert!(backend.recorded().is_empty());
}

struct FullyBookedBackend;

impl BookingBackend for FullyBookedBackend {
    fn submit(&self, _: &ReservationRequest) -> Result<BookingConfirmation, BookingError> {
        Err(BookingError::Rejected("no tables at that time".to_string()))
    }
}

#[actix_rt::test]
async fn backend_rejection_surfaces_notice_and_keeps_values() {
    let backend = Arc::new(FullyBookedBackend);
    let app = test_app!(backend);

    let req = test::TestRequest::post()
        .uri("/reservations")
        .set_form(common::filled_form_pairs())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("We could not take this booking: no tables at that time"));
    assert!(html.contains(common::NAME));
    assert!(html.contains(common::PHONE));
}

#[actix_rt::test]
async fn unknown_path_falls_through_to_404() {
    let backend = Arc::new(RecordingBackend::new());
    let app = test_app!(backend);

    let req = test::TestRequest::get().uri("/wine-cellar").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}
