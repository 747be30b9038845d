use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};
use time::Duration;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod doc;
pub mod health;
pub mod orders;

pub const SESSION_COOKIE: &str = "shop.sid";

/// Idle time after which a session, and the cart in it, is discarded.
pub const SESSION_IDLE_TIMEOUT: Duration = Duration::hours(24);

// Shop routes without state; it is provided by `create_app`.
pub fn create_shop_router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::catalog))
        .merge(auth::router())
        .merge(cart::router())
        .merge(orders::router())
}

/// Cookie-backed sessions over `store`. The cookie is not marked secure so
/// plain-http development works.
pub fn session_layer<St>(store: St) -> SessionManagerLayer<St>
where
    St: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(SESSION_IDLE_TIMEOUT))
}

/// Full application minus the tracing layers, which the binary adds.
pub fn create_app<St>(state: AppState, session_store: St) -> Router
where
    St: SessionStore + Clone,
{
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_shop_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .layer(session_layer(session_store))
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
