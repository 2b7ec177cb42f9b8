use actix_web::{web, HttpRequest, HttpResponse};

use crate::middleware::auth_context::AuthenticatedUser;
use crate::routes::view_response;
use crate::services::guide_service::{GuideError, GuideService};
use crate::state::session_store::SessionStore;

/*
    /api/places/{id}/select
*/
pub async fn select(
    req: HttpRequest,
    path: web::Path<String>,
    user: AuthenticatedUser,
    guide: web::Data<GuideService>,
    sessions: web::Data<SessionStore>,
) -> Result<HttpResponse, GuideError> {
    let place_id = path.into_inner();
    let session = sessions.get_or_create(&user.user_id);
    let snapshot = guide.select_place(&session, &place_id).await?;
    Ok(view_response(&req, &snapshot))
}

/*
    /api/places/back
*/
pub async fn back(
    req: HttpRequest,
    user: AuthenticatedUser,
    guide: web::Data<GuideService>,
    sessions: web::Data<SessionStore>,
) -> HttpResponse {
    let session = sessions.get_or_create(&user.user_id);
    let snapshot = guide.back(&session);
    view_response(&req, &snapshot)
}
