use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    cart::{Cart, CartAction},
    session::SessionUser,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub id: Uuid,
    pub name: String,
    /// Accepts either a JSON number or a numeric string.
    #[schema(value_type = String)]
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub success: bool,
    pub cart_count: usize,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCartRequest {
    pub id: Uuid,
    pub action: CartAction,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateCartResponse {
    pub success: bool,
    pub cart: Cart,
    #[schema(value_type = String)]
    pub total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub cart: Cart,
    #[schema(value_type = String)]
    pub total: Decimal,
    pub user: Option<SessionUser>,
}
