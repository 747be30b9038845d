use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    cart::{Cart, CartAction, CartItem},
    dto::{
        auth::{LoginRequest, LoginView, RegisterRequest},
        cart::{AddToCartRequest, AddToCartResponse, CartView, UpdateCartRequest, UpdateCartResponse},
        catalog::CatalogView,
        orders::{HistoryView, OrderSummary, OrderSummaryItem},
    },
    models::{Order, OrderItem, Product},
    response::{ApiResponse, Meta},
    routes::{SESSION_COOKIE, auth, cart, catalog, health, orders},
    session::SessionUser,
};

struct SessionCookieAddon;

impl Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::catalog,
        auth::login_page,
        auth::register,
        auth::login,
        auth::logout,
        cart::add_to_cart,
        cart::cart_page,
        cart::update_cart,
        orders::checkout,
        orders::history
    ),
    components(
        schemas(
            Product,
            Order,
            OrderItem,
            Cart,
            CartItem,
            CartAction,
            SessionUser,
            RegisterRequest,
            LoginRequest,
            LoginView,
            AddToCartRequest,
            AddToCartResponse,
            UpdateCartRequest,
            UpdateCartResponse,
            CartView,
            CatalogView,
            HistoryView,
            OrderSummary,
            OrderSummaryItem,
            health::HealthData,
            Meta,
            ApiResponse<CatalogView>,
            ApiResponse<CartView>,
            ApiResponse<HistoryView>,
            ApiResponse<LoginView>
        )
    ),
    modifiers(&SessionCookieAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Product catalog"),
        (name = "Auth", description = "Registration, login and logout"),
        (name = "Cart", description = "Session cart endpoints"),
        (name = "Orders", description = "Checkout and purchase history"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
