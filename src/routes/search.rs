use actix_web::{web, Either, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::middleware::auth_context::AuthenticatedUser;
use crate::routes::view_response;
use crate::services::guide_service::{GuideError, GuideService};
use crate::state::session_store::SessionStore;

#[derive(Debug, Deserialize)]
pub struct SearchInput {
    pub query: String,
}

/*
    /api/search
*/
pub async fn search(
    req: HttpRequest,
    user: AuthenticatedUser,
    guide: web::Data<GuideService>,
    sessions: web::Data<SessionStore>,
    input: Either<web::Json<SearchInput>, web::Form<SearchInput>>,
) -> Result<HttpResponse, GuideError> {
    let query = match input {
        Either::Left(json) => json.into_inner().query,
        Either::Right(form) => form.into_inner().query,
    };
    log::info!("Search by {}: '{}'", user.email, query.trim());

    let session = sessions.get_or_create(&user.user_id);
    let snapshot = guide.search(&session, &query).await?;
    Ok(view_response(&req, &snapshot))
}
