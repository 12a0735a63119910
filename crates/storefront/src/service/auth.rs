use crate::{
    abstract_trait::{
        auth::{AuthServiceTrait, DynCredentialVerifier},
        user::DynUserRepository,
    },
    domain::{
        requests::auth::{LoginRequest, RegisterRequest},
        response::user::LoginResponse,
    },
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};

#[derive(Clone)]
pub struct AuthService {
    repository: DynUserRepository,
    credentials: DynCredentialVerifier,
}

impl AuthService {
    pub fn new(repository: DynUserRepository, credentials: DynCredentialVerifier) -> Self {
        Self {
            repository,
            credentials,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(&self, req: &RegisterRequest) -> Result<(), ServiceError> {
        info!("📝 Register attempt for username {}", req.username);

        let record = RegisterRequest {
            username: req.username.clone(),
            email: req.email.clone(),
            password: self.credentials.store(&req.password),
        };

        self.repository.create_user(&record).await.map_err(|err| {
            match &err {
                RepositoryError::AlreadyExists(msg) => {
                    info!("Registration rejected for {}: {}", req.username, msg);
                }
                other => {
                    error!("❌ Failed to register user {}: {:?}", req.username, other);
                }
            }
            ServiceError::from(err)
        })?;

        info!("✅ User registered: {}", req.username);
        Ok(())
    }

    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ServiceError> {
        info!("🔑 Login attempt for username {}", req.username);

        let user = self
            .repository
            .find_by_username(&req.username)
            .await
            .map_err(|err| {
                error!("❌ Failed to look up user {}: {:?}", req.username, err);
                ServiceError::from(err)
            })?;

        let Some(user) = user else {
            return Err(ServiceError::InvalidCredentials(
                "Username does not exist.".into(),
            ));
        };

        if !self.credentials.verify(&req.password, &user.password) {
            return Err(ServiceError::InvalidCredentials(
                "Incorrect password.".into(),
            ));
        }

        if user.role != req.role {
            return Err(ServiceError::Forbidden("Invalid role.".into()));
        }

        info!("✅ Login successful: {} as {}", user.username, user.role);
        Ok(LoginResponse::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::user::MockUserRepositoryTrait, model::user::User};
    use crate::service::credential::PlaintextCredentials;
    use std::sync::Arc;

    fn stored_user() -> User {
        User {
            id: 7,
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "secret".into(),
            role: "user".into(),
        }
    }

    fn service_with(repository: MockUserRepositoryTrait) -> AuthService {
        AuthService::new(Arc::new(repository), Arc::new(PlaintextCredentials))
    }

    fn login_request(password: &str, role: &str) -> LoginRequest {
        LoginRequest {
            username: "alice".into(),
            password: password.into(),
            role: role.into(),
        }
    }

    #[tokio::test]
    async fn login_rejects_unknown_username() {
        let mut repository = MockUserRepositoryTrait::new();
        repository
            .expect_find_by_username()
            .withf(|username| username == "ghost")
            .returning(|_| Ok(None));

        let service = service_with(repository);
        let req = LoginRequest {
            username: "ghost".into(),
            password: "secret".into(),
            role: "user".into(),
        };

        match service.login(&req).await {
            Err(ServiceError::InvalidCredentials(msg)) => {
                assert_eq!(msg, "Username does not exist.");
            }
            other => panic!("expected InvalidCredentials, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let mut repository = MockUserRepositoryTrait::new();
        repository
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user())));

        let service = service_with(repository);

        match service.login(&login_request("wrong", "user")).await {
            Err(ServiceError::InvalidCredentials(msg)) => {
                assert_eq!(msg, "Incorrect password.");
            }
            other => panic!("expected InvalidCredentials, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_rejects_role_mismatch() {
        let mut repository = MockUserRepositoryTrait::new();
        repository
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user())));

        let service = service_with(repository);

        match service.login(&login_request("secret", "admin")).await {
            Err(ServiceError::Forbidden(msg)) => assert_eq!(msg, "Invalid role."),
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_returns_identity_without_password() {
        let mut repository = MockUserRepositoryTrait::new();
        repository
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user())));

        let service = service_with(repository);

        let response = service
            .login(&login_request("secret", "user"))
            .await
            .expect("login should succeed");

        assert_eq!(response.id, 7);
        assert_eq!(response.username, "alice");
        assert_eq!(response.role, "user");

        let body = serde_json::to_value(&response).expect("serializable");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn register_surfaces_duplicate_username() {
        let mut repository = MockUserRepositoryTrait::new();
        repository.expect_create_user().returning(|_| {
            Err(RepositoryError::AlreadyExists(
                "Username already exists.".into(),
            ))
        });

        let service = service_with(repository);
        let req = RegisterRequest {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "secret".into(),
        };

        match service.register(&req).await {
            Err(ServiceError::Repo(RepositoryError::AlreadyExists(msg))) => {
                assert_eq!(msg, "Username already exists.");
            }
            other => panic!("expected AlreadyExists, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn register_stores_password_as_given() {
        let mut repository = MockUserRepositoryTrait::new();
        repository
            .expect_create_user()
            .withf(|record| record.password == "secret")
            .returning(|record| {
                Ok(User {
                    id: 1,
                    username: record.username.clone(),
                    email: record.email.clone(),
                    password: record.password.clone(),
                    role: "user".into(),
                })
            });

        let service = service_with(repository);
        let req = RegisterRequest {
            username: "alice".into(),
            email: "alice@example.com".into(),
            password: "secret".into(),
        };

        service.register(&req).await.expect("register should succeed");
    }
}
