use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::session::SessionUser;

#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Data for the login page; `message` carries the outcome of the last register or
/// login attempt.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginView {
    pub message: Option<String>,
    pub user: Option<SessionUser>,
}
