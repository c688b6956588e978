//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_claims::IntakeError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Claimant input the intake rules refuse
    #[error("Intake rejected: {0}")]
    Intake(#[from] IntakeError),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The decision provider could not evaluate the claim
    #[error("Evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match &self {
            ApiError::Intake(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "intake_rejected",
                err.user_message(),
                Some(vec![err.to_string()]),
            ),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone(), None),
            ApiError::EvaluationFailed(msg) => (StatusCode::BAD_GATEWAY, "evaluation_failed", msg.clone(), None),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable", msg.clone(), None),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone(), None),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
