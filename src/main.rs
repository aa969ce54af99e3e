use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use royl::booking::{BookingBackend, RecordingBackend};
use royl::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // The booking backend boundary. The recording stub stands in for a real
    // booking system; swap the Arc to integrate one.
    let backend: Arc<dyn BookingBackend> = Arc::new(RecordingBackend::new());
    let backend = web::Data::from(backend);

    // Session encryption key — load from SESSION_KEY env var so flash notices
    // survive restarts; otherwise generate a throwaway key.
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key");
            Key::generate()
        }
    };

    log::info!("Starting server at http://127.0.0.1:8080");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(backend.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // The landing page and the reservation endpoint
            .route("/", web::get().to(handlers::pages::index))
            .route("/reservations", web::post().to(handlers::reservation_handlers::submit))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
