use crate::{
    abstract_trait::order::{DynOrderRepository, OrderServiceTrait},
    domain::{
        requests::order::{CreateOrderRequest, UpdateOrderStatusRequest},
        response::order::{OrderItemResponse, OrderResponse},
    },
    model::order::{OrderItemJoinRow, STATUS_RECEIVED},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::collections::{HashMap, hash_map::Entry};
use tracing::{error, info};

/// Regroups the flat orders × order_items × products join into nested
/// orders. Orders keep their first-seen position; each order's items keep
/// the row order of the source query. A row with NULL item columns yields an
/// order with an empty item list.
pub fn group_order_rows(rows: Vec<OrderItemJoinRow>) -> Vec<OrderResponse> {
    let mut orders: Vec<OrderResponse> = Vec::new();
    let mut index_by_id: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let idx = match index_by_id.entry(row.id) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let idx = orders.len();
                entry.insert(idx);
                orders.push(OrderResponse {
                    id: row.id,
                    user_id: row.user_id,
                    username: row.username.clone(),
                    receiver_name: row.receiver_name.clone(),
                    address: row.address.clone(),
                    phone_number: row.phone_number.clone(),
                    total_amount: row.total_amount,
                    status: row.status.clone(),
                    created_at: row.created_at,
                    items: Vec::new(),
                });
                idx
            }
        };

        if let Some(product_id) = row.product_id {
            orders[idx].items.push(OrderItemResponse {
                product_id,
                name: row.name,
                quantity: row.quantity.unwrap_or(0),
                price: row.price.unwrap_or(0.0),
                image_url: row.image_url,
            });
        }
    }

    orders
}

#[derive(Clone)]
pub struct OrderService {
    repository: DynOrderRepository,
}

impl OrderService {
    pub fn new(repository: DynOrderRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn place_order(&self, req: &CreateOrderRequest) -> Result<i32, ServiceError> {
        info!("🏗️ Placing order for user_id={}", req.user_id);

        // Field presence is enforced by the request type; the empty-items
        // case is rejected before any database work starts.
        if req.items.is_empty() {
            return Err(ServiceError::Validation(
                "Order must contain at least one item.".into(),
            ));
        }

        let order_id = self
            .repository
            .create_order_with_items(req)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to place order for user {}: {:?}",
                    req.user_id, err
                );
                ServiceError::from(err)
            })?;

        Ok(order_id)
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<OrderResponse>, ServiceError> {
        let rows = self
            .repository
            .find_by_user(user_id)
            .await
            .map_err(ServiceError::from)?;

        Ok(group_order_rows(rows))
    }

    async fn find_all(&self) -> Result<Vec<OrderResponse>, ServiceError> {
        let rows = self
            .repository
            .find_all()
            .await
            .map_err(ServiceError::from)?;

        Ok(group_order_rows(rows))
    }

    async fn update_status(
        &self,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<(), ServiceError> {
        if req.status != STATUS_RECEIVED {
            return Err(ServiceError::Validation("Invalid status value.".into()));
        }

        let affected = self
            .repository
            .update_status(order_id, &req.status)
            .await
            .map_err(ServiceError::from)?;

        if affected == 0 {
            return Err(ServiceError::NotFound("Order not found.".into()));
        }

        info!(
            "✅ Order status updated: order_id={} status={}",
            order_id, req.status
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::order::MockOrderRepositoryTrait,
        domain::requests::order::CreateOrderItemRequest,
        model::order::STATUS_SHIPPING,
    };
    use std::sync::Arc;

    fn join_row(
        order_id: i32,
        username: Option<&str>,
        item: Option<(i32, &str, i32, f64)>,
    ) -> OrderItemJoinRow {
        OrderItemJoinRow {
            id: order_id,
            user_id: 1,
            username: username.map(String::from),
            receiver_name: "Alice".into(),
            address: "12 Elm Street".into(),
            phone_number: "0123456789".into(),
            total_amount: 99.0,
            status: STATUS_SHIPPING.into(),
            created_at: None,
            product_id: item.map(|(id, _, _, _)| id),
            name: item.map(|(_, name, _, _)| name.to_string()),
            quantity: item.map(|(_, _, quantity, _)| quantity),
            price: item.map(|(_, _, _, price)| price),
            image_url: item.map(|_| "https://example.com/p.png".to_string()),
        }
    }

    fn order_request(items: Vec<CreateOrderItemRequest>) -> CreateOrderRequest {
        CreateOrderRequest {
            user_id: 1,
            receiver_name: "Alice".into(),
            address: "12 Elm Street".into(),
            phone_number: "0123456789".into(),
            total_amount: 99.0,
            items,
        }
    }

    #[test]
    fn regroups_joined_rows_into_nested_orders() {
        let rows = vec![
            join_row(1, None, Some((10, "Keyboard", 2, 49.5))),
            join_row(1, None, Some((11, "Mouse", 1, 19.9))),
            join_row(2, None, None),
        ];

        let orders = group_order_rows(rows);

        assert_eq!(orders.len(), 2);

        assert_eq!(orders[0].id, 1);
        assert_eq!(orders[0].items.len(), 2);
        assert_eq!(orders[0].items[0].product_id, 10);
        assert_eq!(orders[0].items[1].product_id, 11);

        assert_eq!(orders[1].id, 2);
        assert!(orders[1].items.is_empty());
    }

    #[test]
    fn regroup_preserves_first_seen_order_across_interleaved_rows() {
        let rows = vec![
            join_row(5, None, Some((10, "Keyboard", 1, 49.5))),
            join_row(3, None, Some((11, "Mouse", 1, 19.9))),
            join_row(5, None, Some((12, "Monitor", 1, 149.0))),
        ];

        let orders = group_order_rows(rows);

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, 5);
        assert_eq!(orders[0].items.len(), 2);
        assert_eq!(orders[1].id, 3);
        assert_eq!(orders[1].items.len(), 1);
    }

    #[test]
    fn regroup_carries_username_when_present() {
        let rows = vec![join_row(1, Some("alice"), None)];

        let orders = group_order_rows(rows);

        assert_eq!(orders[0].username.as_deref(), Some("alice"));
    }

    #[test]
    fn regroup_of_empty_input_is_empty() {
        assert!(group_order_rows(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn empty_item_list_is_rejected_before_the_repository() {
        let mut repository = MockOrderRepositoryTrait::new();
        repository.expect_create_order_with_items().times(0);

        let service = OrderService::new(Arc::new(repository));

        match service.place_order(&order_request(Vec::new())).await {
            Err(ServiceError::Validation(_)) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn placing_an_order_returns_the_new_id() {
        let mut repository = MockOrderRepositoryTrait::new();
        repository
            .expect_create_order_with_items()
            .times(1)
            .returning(|_| Ok(41));

        let service = OrderService::new(Arc::new(repository));
        let req = order_request(vec![CreateOrderItemRequest {
            product_id: 10,
            quantity: 2,
            price: 49.5,
        }]);

        let order_id = service.place_order(&req).await.expect("order should place");
        assert_eq!(order_id, 41);
    }

    #[tokio::test]
    async fn only_the_received_literal_is_accepted() {
        let mut repository = MockOrderRepositoryTrait::new();
        repository.expect_update_status().times(0);

        let service = OrderService::new(Arc::new(repository));
        let req = UpdateOrderStatusRequest {
            status: "delivered".into(),
        };

        match service.update_status(1, &req).await {
            Err(ServiceError::Validation(msg)) => assert_eq!(msg, "Invalid status value."),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_order_id_is_not_found() {
        let mut repository = MockOrderRepositoryTrait::new();
        repository.expect_update_status().returning(|_, _| Ok(0));

        let service = OrderService::new(Arc::new(repository));
        let req = UpdateOrderStatusRequest {
            status: STATUS_RECEIVED.into(),
        };

        match service.update_status(999, &req).await {
            Err(ServiceError::NotFound(msg)) => assert_eq!(msg, "Order not found."),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn accepted_status_update_reaches_the_repository() {
        let mut repository = MockOrderRepositoryTrait::new();
        repository
            .expect_update_status()
            .withf(|order_id, status| *order_id == 7 && status == STATUS_RECEIVED)
            .times(1)
            .returning(|_, _| Ok(1));

        let service = OrderService::new(Arc::new(repository));
        let req = UpdateOrderStatusRequest {
            status: STATUS_RECEIVED.into(),
        };

        service.update_status(7, &req).await.expect("update should succeed");
    }
}
