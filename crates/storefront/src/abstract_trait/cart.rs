use crate::{
    domain::{requests::cart::AddCartItemRequest, response::cart::CartItemResponse},
    model::cart_item::{CartItem, CartItemWithProduct},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartRepositoryTrait {
    async fn find_item(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, RepositoryError>;
    async fn insert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError>;
    async fn increment_quantity(
        &self,
        user_id: i32,
        product_id: i32,
        by: i32,
    ) -> Result<u64, RepositoryError>;
    async fn set_quantity(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<u64, RepositoryError>;
    async fn delete_item(&self, user_id: i32, product_id: i32) -> Result<u64, RepositoryError>;
    async fn clear(&self, user_id: i32) -> Result<u64, RepositoryError>;
    async fn list_with_products(
        &self,
        user_id: i32,
    ) -> Result<Vec<CartItemWithProduct>, RepositoryError>;
}

/// Which branch of the add-or-increment upsert ran; the handler maps this to
/// 201 (new row) or 200 (existing row updated).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAddOutcome {
    Inserted,
    Incremented,
}

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartServiceTrait {
    async fn add_item(&self, req: &AddCartItemRequest) -> Result<CartAddOutcome, ServiceError>;
    async fn list(&self, user_id: i32) -> Result<Vec<CartItemResponse>, ServiceError>;
    async fn update_quantity(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), ServiceError>;
    async fn remove_item(&self, user_id: i32, product_id: i32) -> Result<(), ServiceError>;
    async fn clear(&self, user_id: i32) -> Result<(), ServiceError>;
}
