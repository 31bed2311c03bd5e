use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Upstream request timed out")]
    Timeout,

    #[error("LLM error: {0}")]
    Llm(String),
}

impl AppError {
    /// Maps an upstream failure for endpoints that only distinguish auth failures.
    pub fn from_llm(err: LlmError) -> Self {
        if err.is_auth() {
            AppError::Unauthorized
        } else {
            AppError::Llm(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => {
                tracing::error!("Upstream rejected the configured API key");
                (
                    StatusCode::UNAUTHORIZED,
                    "UNAUTHORIZED",
                    "AI service authentication failed. Check the API key configuration".to_string(),
                )
            }
            AppError::Timeout => {
                tracing::warn!("Upstream request timed out");
                (
                    StatusCode::REQUEST_TIMEOUT,
                    "TIMEOUT",
                    "The AI service took too long to respond. Please try again".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Timeout.into_response().status(),
            StatusCode::REQUEST_TIMEOUT
        );
        assert_eq!(
            AppError::Llm("boom".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_llm_maps_auth_to_unauthorized() {
        let err = LlmError::Api {
            status: 401,
            message: "invalid x-api-key".to_string(),
        };
        assert!(matches!(AppError::from_llm(err), AppError::Unauthorized));
    }

    #[test]
    fn test_from_llm_maps_other_failures_to_llm() {
        let err = LlmError::Api {
            status: 400,
            message: "bad request".to_string(),
        };
        assert!(matches!(AppError::from_llm(err), AppError::Llm(_)));
        assert!(matches!(
            AppError::from_llm(LlmError::Timeout),
            AppError::Llm(_)
        ));
    }
}
