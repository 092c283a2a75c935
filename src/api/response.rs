use serde::Serialize;

use crate::domain::user::Violation;

/// Envelope wrapped around every JSON body the API returns
///
/// `success` is always present; the other fields are emitted only when the
/// endpoint carries them, so a detail fetch is `{"success": true, "data":
/// {..}}` while a delete is `{"success": true, "message": ".."}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Violation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            count: None,
        }
    }

    /// Successful response carrying a collection and its length
    pub fn list(data: T, count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::data(data)
        }
    }

    /// Successful response carrying a payload and a confirmation message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::data(data)
        }
    }
}

impl ApiResponse<()> {
    /// Successful response carrying only a confirmation message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            errors: None,
            count: None,
        }
    }

    /// Failed response carrying only a message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::message(message)
        }
    }

    /// Failed response carrying field violations
    pub fn violations(errors: Vec<Violation>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            errors: Some(errors),
            count: None,
        }
    }
}
