use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::{dev::Payload, error::ErrorUnauthorized, Error, FromRequest, HttpMessage, HttpRequest};

use crate::models::user::AuthUser;

/// The signed-in traveler, as resolved by `AuthMiddleware`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(AuthUser);

impl AuthenticatedUser {
    pub fn into_inner(self) -> AuthUser {
        self.0
    }
}

impl Deref for AuthenticatedUser {
    type Target = AuthUser;

    fn deref(&self) -> &AuthUser {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<AuthUser>().cloned();
        ready(
            user.map(AuthenticatedUser)
                .ok_or_else(|| ErrorUnauthorized("No traveler resolved for this request")),
        )
    }
}
