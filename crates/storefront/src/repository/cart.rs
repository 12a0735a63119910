use crate::{
    abstract_trait::cart::CartRepositoryTrait,
    model::cart_item::{CartItem, CartItemWithProduct},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct CartRepository {
    db: ConnectionPool,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn find_item(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, CartItem>(
            r#"
            SELECT user_id, product_id, quantity
            FROM cart
            WHERE user_id = $1 AND product_id = $2
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(item)
    }

    async fn insert_item(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query(
            r#"
            INSERT INTO cart (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to add product {} to cart of user {}: {:?}",
                product_id, user_id, err
            );
            RepositoryError::from(err)
        })?;

        Ok(())
    }

    async fn increment_quantity(
        &self,
        user_id: i32,
        product_id: i32,
        by: i32,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE cart
            SET quantity = quantity + $3
            WHERE user_id = $1 AND product_id = $2
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .bind(by)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to increment cart quantity for user {}: {:?}",
                user_id, err
            );
            RepositoryError::from(err)
        })?;

        Ok(result.rows_affected())
    }

    async fn set_quantity(
        &self,
        user_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE cart
            SET quantity = $3
            WHERE user_id = $1 AND product_id = $2
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to set cart quantity for user {}: {:?}",
                user_id, err
            );
            RepositoryError::from(err)
        })?;

        Ok(result.rows_affected())
    }

    async fn delete_item(&self, user_id: i32, product_id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM cart WHERE user_id = $1 AND product_id = $2
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result.rows_affected())
    }

    async fn clear(&self, user_id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM cart WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to clear cart of user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        Ok(result.rows_affected())
    }

    async fn list_with_products(
        &self,
        user_id: i32,
    ) -> Result<Vec<CartItemWithProduct>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let items = sqlx::query_as::<_, CartItemWithProduct>(
            r#"
            SELECT c.user_id, c.product_id, c.quantity, p.name, p.price, p.image_url
            FROM cart c
            JOIN products p ON c.product_id = p.id
            WHERE c.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch cart of user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        Ok(items)
    }
}
