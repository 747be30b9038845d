use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::{
    error::AppError,
    session::{SessionUser, ShopSession},
};

/// Logged-in visitor. Extracting it on a route gates that route: anonymous
/// requests are rejected with [`AppError::Unauthorized`], i.e. a redirect to `/login`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

impl From<&SessionUser> for AuthUser {
    fn from(user: &SessionUser) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = ShopSession::from_request_parts(parts, state).await?;
        session
            .user()
            .map(AuthUser::from)
            .ok_or(AppError::Unauthorized)
    }
}
