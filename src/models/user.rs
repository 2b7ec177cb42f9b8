use serde::{Deserialize, Serialize};

/// The signed-in user as asserted by the identity provider's token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub email: String,
}
