use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorServiceUnavailable, ErrorUnauthorized},
    web, Error, HttpMessage, HttpRequest,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::services::identity_service::IdentityProvider;

pub const SESSION_COOKIE: &str = "session_token";

/// Bearer token from the `Authorization` header, or the session cookie for page loads.
pub fn request_token(req: &HttpRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string());

    from_header
        .or_else(|| req.cookie(SESSION_COOKIE).map(|c| c.value().to_string()))
        .filter(|token| !token.is_empty())
}

/// Rejects requests without a valid identity-provider token and stores the
/// signed-in `AuthUser` in the request extensions.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let Some(provider) = req.app_data::<web::Data<IdentityProvider>>() else {
            log::error!("IdentityProvider missing from app data");
            return Box::pin(ready(Err(ErrorServiceUnavailable("Sign-in unavailable"))));
        };

        let token = request_token(req.request());
        let state = provider.subscribe().auth_state(token.as_deref());

        if state.is_loading {
            return Box::pin(ready(Err(ErrorServiceUnavailable("Sign-in is loading"))));
        }

        match state.user {
            Some(user) => {
                req.extensions_mut().insert(user);
                Box::pin(self.service.call(req))
            }
            None if token.is_some() => Box::pin(ready(Err(ErrorUnauthorized("Invalid token")))),
            None => Box::pin(ready(Err(ErrorUnauthorized("No authorization header")))),
        }
    }
}
