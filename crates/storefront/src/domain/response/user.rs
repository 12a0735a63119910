use crate::model::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login result; deliberately excludes the password column.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginResponse {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl From<User> for LoginResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
