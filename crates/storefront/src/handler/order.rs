use crate::{
    abstract_trait::order::DynOrderService,
    domain::{
        requests::order::{CreateOrderRequest, UpdateOrderStatusRequest},
        response::order::{CreateOrderResponse, OrderResponse},
    },
    middleware::{ValidatedJson, admin_role_middleware},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::json;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = CreateOrderResponse),
        (status = 400, description = "Missing fields or empty item list"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_order_handler(
    Extension(service): Extension<DynOrderService>,
    ValidatedJson(req): ValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order_id = service.place_order(&req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Order placed successfully!".into(),
            order_id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Orders of the user with nested items", body = Vec<OrderResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_user_orders_handler(
    Extension(service): Extension<DynOrderService>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service.find_by_user(user_id).await?;

    Ok((StatusCode::OK, Json(orders)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    params(("user_id" = i32, Query, description = "Self-asserted caller ID, must be an admin")),
    responses(
        (status = 200, description = "All orders with nested items and username", body = Vec<OrderResponse>),
        (status = 400, description = "Missing user_id"),
        (status = 403, description = "Caller is not an admin"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_all_orders_handler(
    Extension(service): Extension<DynOrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service.find_all().await?;

    Ok((StatusCode::OK, Json(orders)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = "Order",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = serde_json::Value),
        (status = 400, description = "Invalid status value"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_order_status_handler(
    Extension(service): Extension<DynOrderService>,
    Path(order_id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.update_status(order_id, &req).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Order status updated successfully!"
        })),
    ))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let open = OpenApiRouter::new()
        .route("/api/orders", post(create_order_handler))
        .route("/api/orders/{id}", get(get_user_orders_handler))
        .route("/api/orders/{id}/status", put(update_order_status_handler));

    let admin = OpenApiRouter::new()
        .route("/api/orders", get(get_all_orders_handler))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            admin_role_middleware,
        ));

    open.merge(admin)
        .layer(Extension(app_state.di_container.order_service.clone()))
}
