use crate::{
    abstract_trait::{auth::IdentityVerifier, user::DynUserRepository},
    model::user::ROLE_ADMIN,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::error;

/// Admin check keyed off the client-supplied user id. Nonexistent users and
/// non-admin roles are indistinguishable to the caller.
#[derive(Clone)]
pub struct RoleGuard {
    users: DynUserRepository,
}

impl RoleGuard {
    pub fn new(users: DynUserRepository) -> Self {
        Self { users }
    }
}

#[async_trait]
impl IdentityVerifier for RoleGuard {
    async fn verify_admin(&self, user_id: i32) -> Result<(), ServiceError> {
        let role = self.users.find_role_by_id(user_id).await.map_err(|err| {
            error!("❌ Failed to check role of user {}: {:?}", user_id, err);
            ServiceError::from(err)
        })?;

        match role.as_deref() {
            Some(ROLE_ADMIN) => Ok(()),
            _ => Err(ServiceError::Forbidden(
                "Only admin can access this resource.".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::user::MockUserRepositoryTrait;
    use std::sync::Arc;

    fn guard_with_role(role: Option<&'static str>) -> RoleGuard {
        let mut repository = MockUserRepositoryTrait::new();
        repository
            .expect_find_role_by_id()
            .returning(move |_| Ok(role.map(String::from)));
        RoleGuard::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn admin_passes() {
        let guard = guard_with_role(Some("admin"));
        guard.verify_admin(1).await.expect("admin should pass");
    }

    #[tokio::test]
    async fn non_admin_is_forbidden() {
        let guard = guard_with_role(Some("user"));
        match guard.verify_admin(1).await {
            Err(ServiceError::Forbidden(_)) => {}
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_user_is_forbidden() {
        let guard = guard_with_role(None);
        match guard.verify_admin(99).await {
            Err(ServiceError::Forbidden(_)) => {}
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }
}
