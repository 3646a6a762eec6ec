//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use study_data::StudyError;
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API error with HTTP status code
///
/// Rendered as `{"success": false, "error": "<message>"}`.
#[derive(Debug, Clone, Error)]
#[error("[{status}] {message}")]
pub struct ApiError {
    /// HTTP status code
    pub status: StatusCode,

    /// Error message
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 500 Internal Server Error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<StudyError> for ApiError {
    fn from(err: StudyError) -> Self {
        Self::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "success": false,
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::internal("Something went wrong");
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "Something went wrong");
    }

    #[test]
    fn test_api_error_from_study_error() {
        let error = ApiError::from(StudyError::InvalidConfig("bad".to_string()));
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.message.contains("bad"));
    }

    #[test]
    fn test_api_error_display() {
        let display = ApiError::internal("boom").to_string();
        assert!(display.contains("500"));
        assert!(display.contains("boom"));
    }

    #[test]
    fn test_api_error_into_response() {
        let response = ApiError::internal("test error").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
