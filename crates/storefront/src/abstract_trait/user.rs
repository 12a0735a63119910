use crate::{domain::requests::auth::RegisterRequest, model::user::User};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait {
    async fn create_user(&self, req: &RegisterRequest) -> Result<User, RepositoryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
    async fn find_role_by_id(&self, user_id: i32) -> Result<Option<String>, RepositoryError>;
}
