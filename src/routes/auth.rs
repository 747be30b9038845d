use axum::{
    Form, Json, Router,
    extract::State,
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use crate::{
    dto::auth::{LoginRequest, LoginView, RegisterRequest},
    error::AppResult,
    response::{ApiResponse, Meta},
    services::auth_service::{RegisterOutcome, login_user, register_user},
    session::{SessionUser, ShopSession},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/register", axum::routing::post(register))
        .route("/logout", get(logout))
}

/// Failed form posts render without a user, whatever the session holds.
fn login_view(message: Option<&str>, user: Option<SessionUser>) -> Json<ApiResponse<LoginView>> {
    let view = LoginView {
        message: message.map(str::to_string),
        user,
    };
    Json(ApiResponse::success("Login", view, Some(Meta::empty())))
}

#[utoipa::path(
    get,
    path = "/login",
    responses(
        (status = 200, description = "Login page", body = ApiResponse<LoginView>)
    ),
    tag = "Auth"
)]
pub async fn login_page(session: ShopSession) -> Json<ApiResponse<LoginView>> {
    login_view(None, session.user().cloned())
}

#[utoipa::path(
    post,
    path = "/register",
    request_body(content = RegisterRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login page with the registration outcome", body = ApiResponse<LoginView>)
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Form(payload): Form<RegisterRequest>,
) -> AppResult<Json<ApiResponse<LoginView>>> {
    let message = match register_user(&state, payload).await? {
        RegisterOutcome::Registered(_) => "Registration successful, please log in",
        RegisterOutcome::EmailTaken => "Email is already registered",
        RegisterOutcome::MissingFields => "All fields are required",
    };
    Ok(login_view(Some(message), None))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to the catalog"),
        (status = 200, description = "Invalid credentials, login page with message", body = ApiResponse<LoginView>)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    mut session: ShopSession,
    Form(payload): Form<LoginRequest>,
) -> AppResult<Response> {
    match login_user(&state, payload).await? {
        Some(user) => {
            session.log_in(user).await?;
            Ok(Redirect::to("/").into_response())
        }
        None => Ok(login_view(Some("Invalid email or password"), None).into_response()),
    }
}

#[utoipa::path(
    get,
    path = "/logout",
    responses(
        (status = 303, description = "Session destroyed, redirect to the catalog")
    ),
    tag = "Auth"
)]
pub async fn logout(session: ShopSession) -> AppResult<Redirect> {
    session.log_out().await?;
    Ok(Redirect::to("/"))
}
