use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// Cart row joined with the referenced product's display columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItemWithProduct {
    pub user_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub name: String,
    pub price: f64,
    pub image_url: String,
}
