use crate::model::cart_item::CartItemWithProduct;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CartItemResponse {
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub name: String,
    pub price: f64,
    pub image_url: String,
}

impl From<CartItemWithProduct> for CartItemResponse {
    fn from(row: CartItemWithProduct) -> Self {
        Self {
            user_id: row.user_id,
            product_id: row.product_id,
            quantity: row.quantity,
            name: row.name,
            price: row.price,
            image_url: row.image_url,
        }
    }
}
