use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    models::{Order, OrderItem},
    session::SessionUser,
};

/// Rows written by a successful checkout.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlacedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderSummaryItem {
    pub name: String,
    pub quantity: i32,
    #[schema(value_type = String)]
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OrderSummary {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    #[schema(value_type = String)]
    pub total: Decimal,
    pub items: Vec<OrderSummaryItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryView {
    pub orders: Vec<OrderSummary>,
    pub user: Option<SessionUser>,
}
