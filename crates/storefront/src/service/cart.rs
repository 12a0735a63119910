use crate::{
    abstract_trait::cart::{CartAddOutcome, CartServiceTrait, DynCartRepository},
    domain::{requests::cart::AddCartItemRequest, response::cart::CartItemResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct CartService {
    repository: DynCartRepository,
}

impl CartService {
    pub fn new(repository: DynCartRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn add_item(&self, req: &AddCartItemRequest) -> Result<CartAddOutcome, ServiceError> {
        info!(
            "🛒 Add to cart: user_id={} product_id={} quantity={}",
            req.user_id, req.product_id, req.quantity
        );

        // Check-then-act: two concurrent adds for the same key can both pass
        // the check and insert duplicate rows. The table carries no unique
        // constraint, so the database will not stop them.
        let existing = self
            .repository
            .find_item(req.user_id, req.product_id)
            .await
            .map_err(|err| {
                error!("❌ Failed to check cart: {:?}", err);
                ServiceError::from(err)
            })?;

        if existing.is_some() {
            self.repository
                .increment_quantity(req.user_id, req.product_id, req.quantity)
                .await
                .map_err(ServiceError::from)?;

            Ok(CartAddOutcome::Incremented)
        } else {
            self.repository
                .insert_item(req.user_id, req.product_id, req.quantity)
                .await
                .map_err(ServiceError::from)?;

            Ok(CartAddOutcome::Inserted)
        }
    }

    async fn list(&self, user_id: i32) -> Result<Vec<CartItemResponse>, ServiceError> {
        let items = self
            .repository
            .list_with_products(user_id)
            .await
            .map_err(ServiceError::from)?;

        Ok(items.into_iter().map(CartItemResponse::from).collect())
    }

    async fn update_quantity(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), ServiceError> {
        let affected = self
            .repository
            .set_quantity(user_id, product_id, quantity)
            .await
            .map_err(ServiceError::from)?;

        if affected == 0 {
            return Err(ServiceError::NotFound("Item is not in the cart.".into()));
        }

        info!(
            "✅ Cart quantity updated: user_id={} product_id={} quantity={}",
            user_id, product_id, quantity
        );
        Ok(())
    }

    async fn remove_item(&self, user_id: i32, product_id: i32) -> Result<(), ServiceError> {
        let affected = self
            .repository
            .delete_item(user_id, product_id)
            .await
            .map_err(ServiceError::from)?;

        if affected == 0 {
            return Err(ServiceError::NotFound("Item is not in the cart.".into()));
        }

        info!(
            "✅ Removed from cart: user_id={} product_id={}",
            user_id, product_id
        );
        Ok(())
    }

    async fn clear(&self, user_id: i32) -> Result<(), ServiceError> {
        // An already-empty cart is not an error here.
        self.repository
            .clear(user_id)
            .await
            .map_err(ServiceError::from)?;

        info!("✅ Cart cleared: user_id={}", user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::cart::MockCartRepositoryTrait, model::cart_item::CartItem};
    use std::sync::Arc;

    fn add_request() -> AddCartItemRequest {
        AddCartItemRequest {
            user_id: 1,
            product_id: 2,
            quantity: 3,
        }
    }

    #[tokio::test]
    async fn existing_pair_takes_increment_path() {
        let mut repository = MockCartRepositoryTrait::new();
        repository.expect_find_item().returning(|user_id, product_id| {
            Ok(Some(CartItem {
                user_id,
                product_id,
                quantity: 5,
            }))
        });
        repository
            .expect_increment_quantity()
            .withf(|user_id, product_id, by| *user_id == 1 && *product_id == 2 && *by == 3)
            .times(1)
            .returning(|_, _, _| Ok(1));
        repository.expect_insert_item().times(0);

        let service = CartService::new(Arc::new(repository));
        let outcome = service.add_item(&add_request()).await.expect("add should succeed");

        assert_eq!(outcome, CartAddOutcome::Incremented);
    }

    #[tokio::test]
    async fn new_pair_takes_insert_path() {
        let mut repository = MockCartRepositoryTrait::new();
        repository.expect_find_item().returning(|_, _| Ok(None));
        repository
            .expect_insert_item()
            .withf(|user_id, product_id, quantity| {
                *user_id == 1 && *product_id == 2 && *quantity == 3
            })
            .times(1)
            .returning(|_, _, _| Ok(()));
        repository.expect_increment_quantity().times(0);

        let service = CartService::new(Arc::new(repository));
        let outcome = service.add_item(&add_request()).await.expect("add should succeed");

        assert_eq!(outcome, CartAddOutcome::Inserted);
    }

    #[tokio::test]
    async fn updating_absent_item_is_not_found() {
        let mut repository = MockCartRepositoryTrait::new();
        repository.expect_set_quantity().returning(|_, _, _| Ok(0));

        let service = CartService::new(Arc::new(repository));

        match service.update_quantity(1, 2, 4).await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "Item is not in the cart."),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn clearing_empty_cart_succeeds() {
        let mut repository = MockCartRepositoryTrait::new();
        repository.expect_clear().returning(|_| Ok(0));

        let service = CartService::new(Arc::new(repository));
        service.clear(1).await.expect("clear should succeed");
    }
}
