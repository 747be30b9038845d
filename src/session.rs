//! Per-request view of the visitor's server-side session.
//!
//! Handlers receive a [`ShopSession`] holding a snapshot of [`SessionData`] loaded
//! from `tower-sessions`. The snapshot is never shared; changes are written back
//! explicitly through [`ShopSession::store_cart`], [`ShopSession::log_in`] and
//! [`ShopSession::log_out`].

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    cart::Cart,
    error::{AppError, AppResult},
};

/// Key under which the whole [`SessionData`] record is stored.
pub const SESSION_DATA_KEY: &str = "shop";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub cart: Cart,
}

pub struct ShopSession {
    session: Session,
    data: SessionData,
}

impl ShopSession {
    pub fn user(&self) -> Option<&SessionUser> {
        self.data.user.as_ref()
    }

    pub fn cart(&self) -> &Cart {
        &self.data.cart
    }

    /// Replaces the stored cart with `cart`.
    pub async fn store_cart(&mut self, cart: Cart) -> AppResult<()> {
        self.data.cart = cart;
        self.save().await
    }

    /// Binds `user` to a fresh session id and starts them with an empty cart.
    pub async fn log_in(&mut self, user: SessionUser) -> AppResult<()> {
        self.session.cycle_id().await?;
        self.data = SessionData {
            user: Some(user),
            cart: Cart::new(),
        };
        self.save().await
    }

    /// Destroys the session record and its cookie.
    pub async fn log_out(self) -> AppResult<()> {
        self.session.flush().await?;
        Ok(())
    }

    async fn save(&self) -> AppResult<()> {
        self.session.insert(SESSION_DATA_KEY, &self.data).await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for ShopSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(anyhow::anyhow!(msg)))?;

        let data = session
            .get::<SessionData>(SESSION_DATA_KEY)
            .await?
            .unwrap_or_default();

        Ok(Self { session, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cart_defaults_to_empty() {
        let data: SessionData = serde_json::from_str(r#"{"user":null}"#).unwrap();
        assert!(data.user.is_none());
        assert!(data.cart.is_empty());
    }
}
