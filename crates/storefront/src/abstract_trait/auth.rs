use crate::domain::{
    requests::auth::{LoginRequest, RegisterRequest},
    response::user::LoginResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

/// Seam around password storage and comparison so a hashing scheme can be
/// substituted without touching the register/login contracts.
pub type DynCredentialVerifier = Arc<dyn CredentialVerifier + Send + Sync>;

pub trait CredentialVerifier {
    /// Produce the representation persisted for a raw password.
    fn store(&self, raw: &str) -> String;

    /// Compare a supplied password against the stored representation.
    fn verify(&self, supplied: &str, stored: &str) -> bool;
}

/// Seam around the self-asserted caller identity. The current implementation
/// looks the id up in the users table; a session/token mechanism can replace
/// it without changing call sites.
pub type DynIdentityVerifier = Arc<dyn IdentityVerifier + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityVerifier {
    async fn verify_admin(&self, user_id: i32) -> Result<(), ServiceError>;
}

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn register(&self, req: &RegisterRequest) -> Result<(), ServiceError>;
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ServiceError>;
}
