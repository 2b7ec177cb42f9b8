use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::middleware::auth::request_token;
use crate::services::identity_service::IdentityProvider;
use crate::state::session_store::SessionStore;
use crate::views::layout;

/*
    /
*/
pub async fn index(
    req: HttpRequest,
    identity: web::Data<IdentityProvider>,
    sessions: web::Data<SessionStore>,
) -> impl Responder {
    // The subscription lives for this render only
    let subscription = identity.subscribe();
    let auth = subscription.auth_state(request_token(&req).as_deref());

    let session = auth
        .user
        .as_ref()
        .map(|user| sessions.get_or_create(&user.user_id));

    let body = match &session {
        Some(session) => {
            let state = session.lock();
            layout::app_page(&auth, Some(&*state))
        }
        None => layout::app_page(&auth, None),
    };

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
