use serde::Serialize;
use utoipa::ToSchema;

use crate::{models::Product, session::SessionUser};

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub user: Option<SessionUser>,
    pub cart_count: usize,
}
