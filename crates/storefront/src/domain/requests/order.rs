use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1, message = "user_id is required"))]
    #[serde(rename = "user_id")]
    pub user_id: i32,

    #[validate(length(min = 1, message = "Receiver name is required"))]
    #[serde(rename = "receiver_name")]
    pub receiver_name: String,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "Phone number is required"))]
    #[serde(rename = "phone_number")]
    pub phone_number: String,

    #[validate(range(min = 0.01, message = "Total amount is required"))]
    #[serde(rename = "total_amount")]
    pub total_amount: f64,

    #[validate(length(min = 1, message = "Order must contain at least one item"))]
    pub items: Vec<CreateOrderItemRequest>,
}

// Item fields are taken as sent; only the list's presence is validated.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateOrderItemRequest {
    #[serde(rename = "product_id")]
    pub product_id: i32,

    pub quantity: i32,

    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}
