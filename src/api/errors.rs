use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::response::ApiResponse;
use crate::domain::repositories::StoreError;
use crate::domain::user::Violation;

/// API error type with HTTP status code and enveloped body
///
/// Carries either a message (`{"success": false, "message": ..}`) or a list
/// of field violations (`{"success": false, "errors": [..]}`), matching the
/// failure shapes the presentation layer expects.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: Option<String>,
    pub errors: Option<Vec<Violation>>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            errors: None,
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 400 Bad Request carrying field violations
    pub fn validation(errors: Vec<Violation>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: None,
            errors: Some(errors),
        }
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.errors {
            Some(errors) => ApiResponse::violations(errors),
            None => ApiResponse::failure(
                self.message.unwrap_or_else(|| "Server error".to_string()),
            ),
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateId(_) => Self::bad_request(err.to_string()),
            // Store detail stays in the log; the wire gets a generic message.
            StoreError::Poisoned => {
                tracing::error!("user store failure: {err}");
                Self::internal_server_error("Server error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: ApiError) -> serde_json::Value {
        let response = error.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_renders_failure_envelope() {
        let error = ApiError::not_found("User not found");
        assert_eq!(error.status, StatusCode::NOT_FOUND);

        let json = body_json(error).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "User not found");
        assert!(json.get("errors").is_none());
    }

    #[tokio::test]
    async fn validation_renders_violation_envelope() {
        let error = ApiError::validation(vec![Violation::new("phone", "Invalid phone format")]);
        assert_eq!(error.status, StatusCode::BAD_REQUEST);

        let json = body_json(error).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0]["message"], "Invalid phone format");
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn poisoned_store_maps_to_generic_500() {
        let error = ApiError::from(StoreError::Poisoned);
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(error).await;
        assert_eq!(json["message"], "Server error");
    }

    #[test]
    fn duplicate_id_maps_to_bad_request() {
        let error = ApiError::from(StoreError::DuplicateId("7".to_string()));
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.message.as_deref(), Some("User with id 7 already exists"));
    }
}
