use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct AddCartItemRequest {
    #[validate(range(min = 1, message = "user_id is required"))]
    #[serde(rename = "user_id")]
    pub user_id: i32,

    #[validate(range(min = 1, message = "product_id is required"))]
    #[serde(rename = "product_id")]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateCartQuantityRequest {
    #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
    pub quantity: i32,
}
