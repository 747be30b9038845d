use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    dto::orders::{OrderSummary, OrderSummaryItem},
    error::AppResult,
    middleware::auth::AuthUser,
    state::AppState,
};

/// One (order, order item, product) row of the history join.
#[derive(Debug, Clone, FromRow)]
pub struct HistoryRow {
    pub order_id: Uuid,
    pub date: DateTime<Utc>,
    pub total: Decimal,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

pub async fn purchase_history(state: &AppState, user: &AuthUser) -> AppResult<Vec<OrderSummary>> {
    let rows = sqlx::query_as::<_, HistoryRow>(
        r#"
        SELECT o.id AS order_id, o.date, o.total, p.name, oi.quantity, oi.price
        FROM orders o
        JOIN order_items oi ON o.id = oi.order_id
        JOIN products p ON oi.product_id = p.id
        WHERE o.user_id = $1
        ORDER BY o.date DESC, o.id
        "#,
    )
    .bind(user.user_id)
    .fetch_all(&state.pool)
    .await?;

    Ok(group_rows(rows))
}

/// Folds joined rows into one summary per order. Orders keep the position of their
/// first row; items keep row arrival order.
pub fn group_rows(rows: Vec<HistoryRow>) -> Vec<OrderSummary> {
    let mut orders: Vec<OrderSummary> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.order_id).or_insert_with(|| {
            orders.push(OrderSummary {
                id: row.order_id,
                date: row.date,
                total: row.total,
                items: Vec::new(),
            });
            orders.len() - 1
        });

        orders[slot].items.push(OrderSummaryItem {
            name: row.name,
            quantity: row.quantity,
            price: row.price,
        });
    }

    orders
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn row(order: u128, day: u32, name: &str, quantity: i32, cents: i64) -> HistoryRow {
        HistoryRow {
            order_id: Uuid::from_u128(order),
            date: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            total: Decimal::new(10_000, 2),
            name: name.to_string(),
            quantity,
            price: Decimal::new(cents, 2),
        }
    }

    #[test]
    fn groups_rows_by_order_in_arrival_order() {
        let rows = vec![
            row(2, 10, "Hoodie", 1, 5500),
            row(2, 10, "Mug", 2, 1200),
            row(1, 3, "Stickers", 4, 500),
        ];

        let orders = group_rows(rows);
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, Uuid::from_u128(2));
        assert_eq!(
            orders[0]
                .items
                .iter()
                .map(|i| i.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Hoodie", "Mug"]
        );
        assert_eq!(orders[1].id, Uuid::from_u128(1));
        assert_eq!(orders[1].items[0].quantity, 4);
        assert_eq!(orders[1].items[0].price, Decimal::new(500, 2));
    }

    #[test]
    fn interleaved_rows_still_collapse_to_one_summary_per_order() {
        let rows = vec![
            row(1, 5, "A", 1, 100),
            row(2, 5, "B", 1, 100),
            row(1, 5, "C", 1, 100),
        ];
        let orders = group_rows(rows);
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].items.len(), 2);
        assert_eq!(orders[1].items.len(), 1);
    }

    #[test]
    fn no_rows_means_no_orders() {
        assert!(group_rows(Vec::new()).is_empty());
    }
}
