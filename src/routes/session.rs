use actix_web::{web, HttpResponse, Responder};

use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::user::UserSession;
use crate::services::guide_service::GuideService;
use crate::state::session_store::SessionStore;
use crate::views::{layout, search};

/*
    /api/session
*/
pub async fn user_session(user: AuthenticatedUser) -> impl Responder {
    let user = user.into_inner();
    HttpResponse::Ok().json(UserSession {
        user_id: user.user_id,
        email: user.email,
    })
}

/*
    /api/state
*/
pub async fn view_state(
    user: AuthenticatedUser,
    guide: web::Data<GuideService>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let session = sessions.get_or_create(&user.user_id);
    HttpResponse::Ok().json(guide.snapshot(&session))
}

/*
    /api/views/results
*/
pub async fn results_view(
    user: AuthenticatedUser,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let session = sessions.get_or_create(&user.user_id);
    let body = {
        let state = session.lock();
        search::results_grid(state.results(), state.search_loading())
    };
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/*
    /api/views/details
*/
pub async fn details_view(
    user: AuthenticatedUser,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    let session = sessions.get_or_create(&user.user_id);
    let Some(body) = layout::detail_view(&session.lock()) else {
        return HttpResponse::NotFound().body("No place selected");
    };
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
