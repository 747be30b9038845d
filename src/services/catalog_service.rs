use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::products::{Column, Entity as Products, Model as ProductModel},
    error::AppResult,
    models::Product,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let products = Products::find()
        .order_by_asc(Column::Name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(products)
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        price: model.price,
        image: model.image,
    }
}
