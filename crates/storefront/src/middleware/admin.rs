use crate::state::AppState;
use axum::{
    Json,
    body::{Body, to_bytes},
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use serde_json::Value;
use shared::errors::{ErrorResponse, ServiceError};
use std::sync::Arc;

const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Admin gate for product mutations and the all-orders listing.
///
/// The caller asserts its own id: query string on GET, JSON body otherwise.
/// The body is buffered and restored so downstream extractors still see it.
pub async fn admin_role_middleware(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let (parts, body) = req.into_parts();

    let (user_id, body) = if parts.method == Method::GET {
        (user_id_from_query(parts.uri.query()), body)
    } else {
        let bytes = to_bytes(body, BODY_LIMIT).await.map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid request body.")),
            )
        })?;

        let user_id = serde_json::from_slice::<Value>(&bytes)
            .ok()
            .as_ref()
            .and_then(user_id_from_value);

        (user_id, Body::from(bytes))
    };

    let Some(user_id) = user_id else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing user_id.")),
        ));
    };

    match state.di_container.identity.verify_admin(user_id).await {
        Ok(()) => {
            let req = Request::from_parts(parts, body);
            Ok(next.run(req).await)
        }
        Err(ServiceError::Forbidden(msg)) => {
            Err((StatusCode::FORBIDDEN, Json(ErrorResponse::new(msg))))
        }
        Err(_) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Server error. Please try again.")),
        )),
    }
}

fn user_id_from_query(query: Option<&str>) -> Option<i32> {
    query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("user_id="))
        .and_then(|value| value.parse().ok())
}

fn user_id_from_value(value: &Value) -> Option<i32> {
    match value.get("user_id")? {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_user_id_from_query_string() {
        assert_eq!(user_id_from_query(Some("user_id=7")), Some(7));
        assert_eq!(user_id_from_query(Some("page=2&user_id=7")), Some(7));
        assert_eq!(user_id_from_query(Some("page=2")), None);
        assert_eq!(user_id_from_query(None), None);
    }

    #[test]
    fn reads_user_id_from_json_body() {
        assert_eq!(user_id_from_value(&json!({ "user_id": 7 })), Some(7));
        assert_eq!(user_id_from_value(&json!({ "user_id": "7" })), Some(7));
        assert_eq!(user_id_from_value(&json!({ "user_id": null })), None);
        assert_eq!(user_id_from_value(&json!({})), None);
    }
}
