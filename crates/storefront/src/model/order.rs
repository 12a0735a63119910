use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status an order is created with.
pub const STATUS_SHIPPING: &str = "Đang giao hàng";
/// The only status value the update endpoint accepts.
pub const STATUS_RECEIVED: &str = "Đã nhận hàng";

/// One row of the orders × order_items × products left join.
///
/// Item columns are NULL for an order with no items; `username` is only
/// selected by the unscoped (admin) query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItemJoinRow {
    pub id: i32,
    pub user_id: i32,
    pub username: Option<String>,
    pub receiver_name: String,
    pub address: String,
    pub phone_number: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
    pub product_id: Option<i32>,
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}
