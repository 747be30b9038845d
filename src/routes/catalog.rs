use axum::{Json, extract::State};

use crate::{
    dto::catalog::CatalogView,
    error::AppResult,
    response::{ApiResponse, Meta},
    services::catalog_service,
    session::ShopSession,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Product catalog with the visitor's cart size", body = ApiResponse<CatalogView>),
        (status = 500, description = "Internal Server Error"),
    ),
    tag = "Catalog"
)]
pub async fn catalog(
    State(state): State<AppState>,
    session: ShopSession,
) -> AppResult<Json<ApiResponse<CatalogView>>> {
    let products = catalog_service::list_products(&state).await?;
    let meta = Meta::with_total(products.len());
    let view = CatalogView {
        products,
        user: session.user().cloned(),
        cart_count: session.cart().len(),
    };
    Ok(Json(ApiResponse::success("Products", view, Some(meta))))
}
