//! Session-scoped shopping cart.
//!
//! The cart lives only inside the visitor's session and is never persisted until
//! checkout. Prices are snapshotted when a product is first added. A line whose
//! quantity would drop to zero is removed, so every stored quantity is at least 1.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Decimal places kept for prices; matches the `NUMERIC(10, 2)` money columns.
pub const PRICE_SCALE: u32 = 2;

/// Rounds a client-supplied price to whole cents, half away from zero like Postgres
/// does when casting to `NUMERIC(10, 2)`.
pub fn normalize_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    /// Product id.
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: i32,
}

impl CartItem {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    Increase,
    Decrease,
    Remove,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Cart {
    #[schema(value_type = Vec<CartItem>)]
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines, not the sum of quantities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    /// Adds one unit of a product and returns the number of lines in the cart.
    ///
    /// An existing line keeps its original name, price and image snapshot. New
    /// prices are rounded to cents so the cart agrees with what checkout stores.
    pub fn add(
        &mut self,
        product_id: Uuid,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> usize {
        match self.items.iter_mut().find(|item| item.id == product_id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                id: product_id,
                name: name.into(),
                price: normalize_price(price),
                image: image.into(),
                quantity: 1,
            }),
        }
        self.items.len()
    }

    /// Applies `action` to the line for `product_id`. Returns `false` and leaves the
    /// cart untouched when there is no such line.
    pub fn update(&mut self, product_id: Uuid, action: CartAction) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == product_id) else {
            return false;
        };

        match action {
            CartAction::Increase => self.items[index].quantity += 1,
            CartAction::Decrease => {
                self.items[index].quantity -= 1;
                if self.items[index].quantity <= 0 {
                    self.items.remove(index);
                }
            }
            CartAction::Remove => {
                self.items.remove(index);
            }
        }
        true
    }

    /// Σ price × quantity, recomputed on every call.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}
