use crate::{
    abstract_trait::cart::{CartAddOutcome, DynCartService},
    domain::{
        requests::cart::{AddCartItemRequest, UpdateCartQuantityRequest},
        response::cart::CartItemResponse,
    },
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/cart",
    tag = "Cart",
    request_body = AddCartItemRequest,
    responses(
        (status = 201, description = "New cart row created", body = serde_json::Value),
        (status = 200, description = "Existing row incremented", body = serde_json::Value),
        (status = 400, description = "Missing fields"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn add_to_cart_handler(
    Extension(service): Extension<DynCartService>,
    ValidatedJson(req): ValidatedJson<AddCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let outcome = service.add_item(&req).await?;

    let response = match outcome {
        CartAddOutcome::Inserted => (
            StatusCode::CREATED,
            Json(json!({
                "status": "success",
                "message": "Product added to cart!"
            })),
        ),
        CartAddOutcome::Incremented => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "Cart updated successfully!"
            })),
        ),
    };

    Ok(response)
}

#[utoipa::path(
    get,
    path = "/api/cart/{user_id}",
    tag = "Cart",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Cart rows joined with product info", body = Vec<CartItemResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_cart_handler(
    Extension(service): Extension<DynCartService>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let items = service.list(user_id).await?;

    Ok((StatusCode::OK, Json(items)))
}

#[utoipa::path(
    put,
    path = "/api/cart/{user_id}/{product_id}",
    tag = "Cart",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateCartQuantityRequest,
    responses(
        (status = 200, description = "Quantity updated", body = serde_json::Value),
        (status = 400, description = "Quantity below one"),
        (status = 404, description = "Item is not in the cart"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_cart_quantity_handler(
    Extension(service): Extension<DynCartService>,
    Path((user_id, product_id)): Path<(i32, i32)>,
    ValidatedJson(req): ValidatedJson<UpdateCartQuantityRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service
        .update_quantity(user_id, product_id, req.quantity)
        .await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Quantity updated successfully!"
        })),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{user_id}/{product_id}",
    tag = "Cart",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Item removed", body = serde_json::Value),
        (status = 404, description = "Item is not in the cart"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_cart_item_handler(
    Extension(service): Extension<DynCartService>,
    Path((user_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, HttpError> {
    service.remove_item(user_id, product_id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Item removed from cart!"
        })),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{user_id}",
    tag = "Cart",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Cart cleared", body = serde_json::Value),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn clear_cart_handler(
    Extension(service): Extension<DynCartService>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    service.clear(user_id).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Cart cleared successfully!"
        })),
    ))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cart", post(add_to_cart_handler))
        .route("/api/cart/{user_id}", get(get_cart_handler))
        .route("/api/cart/{user_id}", delete(clear_cart_handler))
        .route(
            "/api/cart/{user_id}/{product_id}",
            put(update_cart_quantity_handler),
        )
        .route(
            "/api/cart/{user_id}/{product_id}",
            delete(delete_cart_item_handler),
        )
        .layer(Extension(app_state.di_container.cart_service.clone()))
}
