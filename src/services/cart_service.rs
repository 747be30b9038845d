use crate::{
    cart::Cart,
    dto::cart::{AddToCartRequest, AddToCartResponse, UpdateCartRequest, UpdateCartResponse},
};

pub fn add_to_cart(cart: &mut Cart, payload: AddToCartRequest) -> AddToCartResponse {
    let cart_count = cart.add(payload.id, payload.name, payload.price, payload.image);
    AddToCartResponse {
        success: true,
        cart_count,
    }
}

pub fn update_cart(cart: &mut Cart, payload: UpdateCartRequest) -> UpdateCartResponse {
    if !cart.update(payload.id, payload.action) {
        tracing::debug!(product_id = %payload.id, "update on product not in cart");
    }
    UpdateCartResponse {
        success: true,
        cart: cart.clone(),
        total: cart.total(),
    }
}
