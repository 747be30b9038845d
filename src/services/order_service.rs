use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    cart::Cart,
    dto::orders::PlacedOrder,
    entity::{
        order_items::{ActiveModel as OrderItemActive, Model as OrderItemModel},
        orders::{ActiveModel as OrderActive, Model as OrderModel},
    },
    error::AppResult,
    middleware::auth::AuthUser,
    models::{Order, OrderItem},
    state::AppState,
};

/// Persists `cart` as an order owned by `user`.
///
/// Returns `Ok(None)` without touching the database when the cart is empty. The
/// order row is written before its items, all inside one transaction, so a failed
/// item insert leaves no orphaned order behind.
pub async fn place_order(
    state: &AppState,
    user: &AuthUser,
    cart: &Cart,
) -> AppResult<Option<PlacedOrder>> {
    if cart.is_empty() {
        tracing::debug!(user_id = %user.user_id, "checkout on empty cart");
        return Ok(None);
    }

    let total = cart.total();
    let txn = state.orm.begin().await?;

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.user_id),
        total: Set(total),
        date: NotSet,
    }
    .insert(&txn)
    .await?;

    let mut items: Vec<OrderItem> = Vec::with_capacity(cart.len());
    for line in cart.items() {
        let item = OrderItemActive {
            id: Set(Uuid::new_v4()),
            order_id: Set(order.id),
            product_id: Set(line.id),
            quantity: Set(line.quantity),
            price: Set(line.price),
        }
        .insert(&txn)
        .await?;

        items.push(order_item_from_entity(item));
    }

    txn.commit().await?;

    tracing::info!(
        order_id = %order.id,
        user_id = %user.user_id,
        items = items.len(),
        total = %total,
        "order placed"
    );

    Ok(Some(PlacedOrder {
        order: order_from_entity(order),
        items,
    }))
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        user_id: model.user_id,
        total: model.total,
        date: model.date.with_timezone(&Utc),
    }
}

fn order_item_from_entity(model: OrderItemModel) -> OrderItem {
    OrderItem {
        id: model.id,
        order_id: model.order_id,
        product_id: model.product_id,
        quantity: model.quantity,
        price: model.price,
    }
}
