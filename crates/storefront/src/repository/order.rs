use crate::{
    abstract_trait::order::OrderRepositoryTrait,
    domain::requests::order::CreateOrderRequest,
    model::order::{OrderItemJoinRow, STATUS_SHIPPING},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderRepository {
    db: ConnectionPool,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    // Runs the three statements of the order unit of work on one transaction:
    // insert the order, insert its items, clear the user's cart.
    async fn insert_order_graph(
        tx: &mut Transaction<'_, Postgres>,
        req: &CreateOrderRequest,
    ) -> Result<i32, RepositoryError> {
        let order_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO orders (user_id, receiver_name, address, phone_number, total_amount, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(req.user_id)
        .bind(&req.receiver_name)
        .bind(&req.address)
        .bind(&req.phone_number)
        .bind(req.total_amount)
        .bind(STATUS_SHIPPING)
        .fetch_one(&mut **tx)
        .await
        .map_err(RepositoryError::from)?;

        for item in &req.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, quantity, price)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.price)
            .execute(&mut **tx)
            .await
            .map_err(RepositoryError::from)?;
        }

        sqlx::query(
            r#"
            DELETE FROM cart WHERE user_id = $1
            "#,
        )
        .bind(req.user_id)
        .execute(&mut **tx)
        .await
        .map_err(RepositoryError::from)?;

        Ok(order_id)
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn create_order_with_items(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<i32, RepositoryError> {
        // The transaction holds its pooled connection for all three
        // statements; the pool gets it back on commit and on rollback alike.
        let mut tx = self.db.begin().await.map_err(|err| {
            error!("❌ Failed to begin order transaction: {:?}", err);
            RepositoryError::from(err)
        })?;

        match Self::insert_order_graph(&mut tx, req).await {
            Ok(order_id) => {
                tx.commit().await.map_err(|err| {
                    error!("❌ Failed to commit order for user {}: {:?}", req.user_id, err);
                    RepositoryError::from(err)
                })?;

                info!("✅ Created order {} for user {}", order_id, req.user_id);
                Ok(order_id)
            }
            Err(err) => {
                error!("❌ Order for user {} failed, rolling back: {:?}", req.user_id, err);
                if let Err(rollback_err) = tx.rollback().await {
                    error!("❌ Rollback failed: {:?}", rollback_err);
                }
                Err(err)
            }
        }
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderItemJoinRow>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, OrderItemJoinRow>(
            r#"
            SELECT o.id, o.user_id, NULL::TEXT AS username,
                   o.receiver_name, o.address, o.phone_number,
                   o.total_amount, o.status, o.created_at,
                   oi.product_id, p.name, oi.quantity, oi.price, p.image_url
            FROM orders o
            LEFT JOIN order_items oi ON o.id = oi.order_id
            LEFT JOIN products p ON oi.product_id = p.id
            WHERE o.user_id = $1
            ORDER BY o.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch orders of user {}: {:?}", user_id, err);
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn find_all(&self) -> Result<Vec<OrderItemJoinRow>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, OrderItemJoinRow>(
            r#"
            SELECT o.id, o.user_id, u.username,
                   o.receiver_name, o.address, o.phone_number,
                   o.total_amount, o.status, o.created_at,
                   oi.product_id, p.name, oi.quantity, oi.price, p.image_url
            FROM orders o
            LEFT JOIN order_items oi ON o.id = oi.order_id
            LEFT JOIN products p ON oi.product_id = p.id
            LEFT JOIN users u ON o.user_id = u.id
            ORDER BY o.created_at DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch all orders: {:?}", err);
            RepositoryError::from(err)
        })?;

        Ok(rows)
    }

    async fn update_status(&self, order_id: i32, status: &str) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            UPDATE orders SET status = $2 WHERE id = $1
            "#,
        )
        .bind(order_id)
        .bind(status)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to update status of order {}: {:?}",
                order_id, err
            );
            RepositoryError::from(err)
        })?;

        Ok(result.rows_affected())
    }
}
