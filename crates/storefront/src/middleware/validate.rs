use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use shared::errors::ErrorResponse;
use validator::{Validate, ValidationErrors};

/// Json extractor that also runs the type's `validator` rules. Malformed
/// bodies and failed rules both reject with 400 and a message.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    (
                        StatusCode::BAD_REQUEST,
                        axum::Json(ErrorResponse::new(rejection.body_text())),
                    )
                })?;

        value.validate().map_err(|errors| {
            (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorResponse::new(format_validation_errors(&errors))),
            )
        })?;

        Ok(Self(value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
            messages.push(message);
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::cart::AddCartItemRequest;

    #[test]
    fn rule_messages_surface_in_the_rejection_text() {
        let req = AddCartItemRequest {
            user_id: 1,
            product_id: 2,
            quantity: 0,
        };

        let errors = req.validate().expect_err("quantity 0 must fail");
        let message = format_validation_errors(&errors);

        assert!(message.contains("Quantity must be greater than zero"));
    }
}
