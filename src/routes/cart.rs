use axum::{
    Json, Router,
    routing::{get, post},
};

use crate::{
    dto::cart::{AddToCartRequest, AddToCartResponse, CartView, UpdateCartRequest, UpdateCartResponse},
    error::AppResult,
    response::{ApiResponse, Meta},
    services::cart_service,
    session::ShopSession,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add-to-cart", post(add_to_cart))
        .route("/cart", get(cart_page))
        .route("/update-cart", post(update_cart))
}

#[utoipa::path(
    post,
    path = "/add-to-cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Product added, returns the number of cart lines", body = AddToCartResponse),
        (status = 422, description = "Malformed body"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    mut session: ShopSession,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<AddToCartResponse>> {
    let mut cart = session.cart().clone();
    let resp = cart_service::add_to_cart(&mut cart, payload);
    session.store_cart(cart).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/cart",
    responses(
        (status = 200, description = "Cart contents and total", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn cart_page(session: ShopSession) -> Json<ApiResponse<CartView>> {
    let cart = session.cart().clone();
    let meta = Meta::with_total(cart.len());
    let view = CartView {
        total: cart.total(),
        cart,
        user: session.user().cloned(),
    };
    Json(ApiResponse::success("Cart", view, Some(meta)))
}

#[utoipa::path(
    post,
    path = "/update-cart",
    request_body = UpdateCartRequest,
    responses(
        (status = 200, description = "Updated cart and recomputed total", body = UpdateCartResponse),
        (status = 422, description = "Unknown action"),
    ),
    tag = "Cart"
)]
pub async fn update_cart(
    mut session: ShopSession,
    Json(payload): Json<UpdateCartRequest>,
) -> AppResult<Json<UpdateCartResponse>> {
    let mut cart = session.cart().clone();
    let resp = cart_service::update_cart(&mut cart, payload);
    session.store_cart(cart).await?;
    Ok(Json(resp))
}
