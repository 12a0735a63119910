use crate::{
    abstract_trait::auth::DynAuthService,
    domain::{
        requests::auth::{LoginRequest, RegisterRequest},
        response::user::LoginResponse,
    },
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{Extension, Json, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::json;
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "User",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = serde_json::Value),
        (status = 400, description = "Missing fields or duplicate username/email"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynAuthService>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.register(&req).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "Registration successful!"
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "User",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Unknown username or wrong password"),
        (status = 403, description = "Role mismatch"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynAuthService>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login(&req).await?;

    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/users/register", post(register_user_handler))
        .route("/api/users/login", post(login_user_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()))
}
