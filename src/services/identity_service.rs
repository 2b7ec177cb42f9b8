//! Verification of tokens issued by the external identity provider.
//!
//! The provider is created once at startup and shared through `web::Data`. It starts in the
//! loading state and becomes ready once its signing secret is installed. Consumers
//! `subscribe()` for as long as they render auth-dependent output; dropping the
//! subscription unsubscribes.

use std::sync::Arc;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

use crate::config::IdentitySecretSource;
use crate::models::user::{AuthState, AuthUser};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,     // subject (email)
    pub exp: usize,      // expiration time
    pub iat: usize,      // issued at
    pub user_id: String,
}

impl Claims {
    pub fn user(&self) -> AuthUser {
        AuthUser {
            user_id: self.user_id.clone(),
            email: self.sub.clone(),
        }
    }
}

#[derive(Clone)]
enum KeyStatus {
    Loading,
    Ready(DecodingKey),
}

#[derive(Clone)]
pub struct IdentityProvider {
    status: Arc<watch::Sender<KeyStatus>>,
}

impl IdentityProvider {
    /// A provider that reports `is_loading` until a secret is installed.
    pub fn pending() -> Self {
        let (sender, _) = watch::channel(KeyStatus::Loading);
        Self {
            status: Arc::new(sender),
        }
    }

    pub fn with_secret(secret: &str) -> Self {
        let provider = Self::pending();
        provider.install_secret(secret);
        provider
    }

    pub fn install_secret(&self, secret: &str) {
        self.status
            .send_replace(KeyStatus::Ready(DecodingKey::from_secret(secret.as_bytes())));
        info!("Identity provider ready");
    }

    pub fn is_ready(&self) -> bool {
        matches!(*self.status.borrow(), KeyStatus::Ready(_))
    }

    pub fn subscriber_count(&self) -> usize {
        self.status.receiver_count()
    }

    pub fn subscribe(&self) -> AuthSubscription {
        let id = Uuid::new_v4();
        debug!("Auth subscription {} opened", id);
        AuthSubscription {
            id,
            receiver: self.status.subscribe(),
        }
    }

    /// Loads the secret from its configured source and installs it.
    pub async fn load_secret(&self, source: &IdentitySecretSource) -> std::io::Result<()> {
        match source {
            IdentitySecretSource::Inline(secret) => self.install_secret(secret),
            IdentitySecretSource::File(path) => {
                let secret = tokio::fs::read_to_string(path).await?;
                self.install_secret(secret.trim());
            }
            IdentitySecretSource::Missing => {
                log::warn!("No JWT_SECRET or IDENTITY_SECRET_FILE set; sign-in stays unavailable");
            }
        }
        Ok(())
    }
}

/// A live view of the provider's readiness.
pub struct AuthSubscription {
    id: Uuid,
    receiver: watch::Receiver<KeyStatus>,
}

impl AuthSubscription {
    /// Resolves a bearer token to the auth state the UI should render.
    pub fn auth_state(&self, token: Option<&str>) -> AuthState {
        let key = match &*self.receiver.borrow() {
            KeyStatus::Loading => return AuthState::loading(),
            KeyStatus::Ready(key) => key.clone(),
        };

        let Some(token) = token else {
            return AuthState::signed_out();
        };

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iat", "sub", "user_id"]);

        match decode::<Claims>(token, &key, &validation) {
            Ok(token_data) => AuthState::signed_in(token_data.claims.user()),
            Err(err) => {
                debug!("Rejected token: {:?}", err);
                AuthState::signed_out()
            }
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        debug!("Auth subscription {} closed", self.id);
    }
}

/// Signs a token the way the identity provider does. Used for local development and tests.
pub fn issue_token(secret: &str, user: &AuthUser, ttl_secs: usize) -> jsonwebtoken::errors::Result<String> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user.email.clone(),
        exp: now + ttl_secs,
        iat: now,
        user_id: user.user_id.clone(),
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traveler() -> AuthUser {
        AuthUser {
            user_id: "user-1".to_string(),
            email: "traveler@example.com".to_string(),
        }
    }

    #[test]
    fn pending_provider_reports_loading() {
        let provider = IdentityProvider::pending();
        let subscription = provider.subscribe();
        assert_eq!(subscription.auth_state(Some("whatever")), AuthState::loading());
    }

    #[test]
    fn resolves_valid_token() {
        let provider = IdentityProvider::with_secret("s3cret");
        let token = issue_token("s3cret", &traveler(), 3600).unwrap();

        let state = provider.subscribe().auth_state(Some(&token));
        assert_eq!(state, AuthState::signed_in(traveler()));
    }

    #[test]
    fn missing_or_foreign_token_is_signed_out() {
        let provider = IdentityProvider::with_secret("s3cret");
        let subscription = provider.subscribe();
        let foreign = issue_token("other", &traveler(), 3600).unwrap();

        assert_eq!(subscription.auth_state(None), AuthState::signed_out());
        assert_eq!(subscription.auth_state(Some(&foreign)), AuthState::signed_out());
    }

    #[test]
    fn dropping_a_subscription_unsubscribes() {
        let provider = IdentityProvider::pending();
        let first = provider.subscribe();
        let second = provider.subscribe();
        assert_eq!(provider.subscriber_count(), 2);

        drop(first);
        assert_eq!(provider.subscriber_count(), 1);
        drop(second);
        assert_eq!(provider.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn subscribers_see_the_secret_arrive() {
        let provider = IdentityProvider::pending();
        let subscription = provider.subscribe();
        let token = issue_token("late", &traveler(), 3600).unwrap();
        assert!(subscription.auth_state(Some(&token)).is_loading);

        let installer = provider.clone();
        tokio::spawn(async move { installer.install_secret("late") })
            .await
            .unwrap();

        assert!(subscription.auth_state(Some(&token)).user.is_some());
    }
}
