use actix_web::{http::header, web, HttpRequest, HttpResponse};

use crate::middleware::auth::AuthMiddleware;
use crate::state::view_state::ViewSnapshot;

pub mod health;
pub mod place;
pub mod placeholder;
pub mod search;
pub mod session;
pub mod shell;

/// Browser form posts are redirected back to the page; API clients get the snapshot.
pub fn view_response(req: &HttpRequest, snapshot: &ViewSnapshot) -> HttpResponse {
    let wants_html = req
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|accept| accept.contains("text/html"))
        .unwrap_or(false);

    if wants_html {
        HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/"))
            .finish()
    } else {
        HttpResponse::Ok().json(snapshot)
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(shell::index))
        .route("/health", web::get().to(health::health_check))
        .route(
            "/api/placeholder/{width}/{height}",
            web::get().to(placeholder::placeholder),
        )
        .service(
            web::scope("/api")
                // Protected routes
                .wrap(AuthMiddleware)
                .route("/session", web::get().to(session::user_session))
                .route("/state", web::get().to(session::view_state))
                .route("/search", web::post().to(search::search))
                .route("/places/back", web::post().to(place::back))
                .route("/places/{id}/select", web::post().to(place::select))
                .route("/views/results", web::get().to(session::results_view))
                .route("/views/details", web::get().to(session::details_view)),
        );
}
