use crate::{
    domain::{
        requests::order::{CreateOrderRequest, UpdateOrderStatusRequest},
        response::order::OrderResponse,
    },
    model::order::OrderItemJoinRow,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepositoryTrait {
    /// Unit of work: insert the order, its items, and clear the user's cart,
    /// all on one transaction. Returns the new order id.
    async fn create_order_with_items(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<i32, RepositoryError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderItemJoinRow>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<OrderItemJoinRow>, RepositoryError>;
    async fn update_status(&self, order_id: i32, status: &str) -> Result<u64, RepositoryError>;
}

pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderServiceTrait {
    async fn place_order(&self, req: &CreateOrderRequest) -> Result<i32, ServiceError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn update_status(
        &self,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<(), ServiceError>;
}
