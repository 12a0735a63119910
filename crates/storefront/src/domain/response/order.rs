use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct OrderItemResponse {
    pub product_id: i32,
    pub name: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,

    // Present only on the unscoped (admin) listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    pub receiver_name: String,
    pub address: String,
    pub phone_number: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateOrderResponse {
    pub message: String,

    #[serde(rename = "orderId")]
    pub order_id: i32,
}
