use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};

use crate::{
    cart::Cart,
    dto::orders::HistoryView,
    error::AppResult,
    middleware::auth::AuthUser,
    receipt::Receipt,
    response::{ApiResponse, Meta},
    services::{history_service, order_service},
    session::ShopSession,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/checkout", post(checkout))
        .route("/history", get(history))
}

#[utoipa::path(
    post,
    path = "/checkout",
    responses(
        (status = 200, description = "PDF receipt for the new order", content_type = "application/pdf", body = Vec<u8>),
        (status = 303, description = "Empty cart (redirect to /cart) or not logged in (redirect to /login)"),
        (status = 500, description = "Internal Server Error"),
    ),
    security(("session_cookie" = [])),
    tag = "Orders"
)]
pub async fn checkout(
    State(state): State<AppState>,
    user: AuthUser,
    mut session: ShopSession,
) -> AppResult<Response> {
    let cart = session.cart().clone();
    let Some(placed) = order_service::place_order(&state, &user, &cart).await? else {
        return Ok(Redirect::to("/cart").into_response());
    };

    let receipt = Receipt::new(&placed.order, user.username.as_str(), &cart);
    let pdf = receipt.render_pdf()?;

    session.store_cart(Cart::new()).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", receipt.file_name()),
        ),
    ];
    Ok((headers, pdf).into_response())
}

#[utoipa::path(
    get,
    path = "/history",
    responses(
        (status = 200, description = "Orders of the logged-in user, newest first", body = ApiResponse<HistoryView>),
        (status = 303, description = "Not logged in, redirect to /login"),
    ),
    security(("session_cookie" = [])),
    tag = "Orders"
)]
pub async fn history(
    State(state): State<AppState>,
    user: AuthUser,
    session: ShopSession,
) -> AppResult<Json<ApiResponse<HistoryView>>> {
    let orders = history_service::purchase_history(&state, &user).await?;
    let meta = Meta::with_total(orders.len());
    let view = HistoryView {
        orders,
        user: session.user().cloned(),
    };
    Ok(Json(ApiResponse::success("History", view, Some(meta))))
}
