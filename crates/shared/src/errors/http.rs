use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

// User-facing text for any infrastructure failure; details stay in the logs.
const INTERNAL_MESSAGE: &str = "Server error. Please try again.";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => HttpError::BadRequest(msg),

            ServiceError::InvalidCredentials(msg) => HttpError::Unauthorized(msg),

            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::BadRequest(msg),
                _ => HttpError::Internal(INTERNAL_MESSAGE.into()),
            },

            ServiceError::Internal(_) => HttpError::Internal(INTERNAL_MESSAGE.into()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(msg));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        HttpError::from(err).into_response().status()
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ServiceError::Validation("Quantity must be greater than zero.".into());
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_credentials_maps_to_unauthorized() {
        let err = ServiceError::InvalidCredentials("Incorrect password.".into());
        assert_eq!(status_of(err), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn forbidden_maps_to_forbidden() {
        let err = ServiceError::Forbidden("Only admin can access this resource.".into());
        assert_eq!(status_of(err), StatusCode::FORBIDDEN);
    }

    #[test]
    fn duplicate_key_maps_to_bad_request_with_message() {
        let err = ServiceError::Repo(RepositoryError::AlreadyExists(
            "Username already exists.".into(),
        ));
        match HttpError::from(err) {
            HttpError::BadRequest(msg) => assert_eq!(msg, "Username already exists."),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn repository_failures_collapse_to_generic_internal() {
        let err = ServiceError::Repo(RepositoryError::Custom("connection reset".into()));
        match HttpError::from(err) {
            HttpError::Internal(msg) => {
                assert_eq!(msg, INTERNAL_MESSAGE);
                assert!(!msg.contains("connection reset"));
            }
            other => panic!("expected Internal, got {other:?}"),
        }
    }
}
