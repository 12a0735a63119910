use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[validate(range(min = 0.01, message = "Price must be greater than zero"))]
    pub price: f64,

    #[validate(length(min = 1, message = "Image URL is required"))]
    #[serde(rename = "image_url")]
    pub image_url: String,

    // Self-asserted caller id; consumed by the admin gate, not persisted.
    #[serde(default, rename = "user_id")]
    pub user_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,

    #[validate(range(min = 0.01, message = "Price must be greater than zero"))]
    pub price: f64,

    #[validate(length(min = 1, message = "Image URL is required"))]
    #[serde(rename = "image_url")]
    pub image_url: String,

    #[serde(default, rename = "user_id")]
    pub user_id: Option<i32>,
}
