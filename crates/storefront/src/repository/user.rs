use crate::{
    abstract_trait::user::UserRepositoryTrait,
    domain::requests::auth::RegisterRequest,
    model::user::{ROLE_USER, User},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::error::ErrorKind;
use tracing::error;

#[derive(Clone)]
pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

// The users table carries named unique constraints (users_username_key,
// users_email_key) so a duplicate can be reported against the right field.
fn map_unique_violation(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if matches!(db_err.kind(), ErrorKind::UniqueViolation) {
            let constraint = db_err.constraint().unwrap_or_default();
            if constraint.contains("username") {
                return RepositoryError::AlreadyExists("Username already exists.".into());
            }
            if constraint.contains("email") {
                return RepositoryError::AlreadyExists("Email already exists.".into());
            }
            return RepositoryError::AlreadyExists("Duplicate value.".into());
        }
    }
    RepositoryError::Sqlx(err)
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create_user(&self, req: &RegisterRequest) -> Result<User, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password, role
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .bind(&req.password)
        .bind(ROLE_USER)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert user {}: {:?}", req.username, err);
            map_unique_violation(err)
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password, role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }

    async fn find_role_by_id(&self, user_id: i32) -> Result<Option<String>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let role = sqlx::query_scalar::<_, String>(
            r#"
            SELECT role FROM users WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(role)
    }
}
