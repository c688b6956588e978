//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppState, error::ApiError};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check (includes the decision provider)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let provider = state.provider.health_check().await;
    if !provider.is_operational() {
        return Err(ApiError::Unavailable(format!(
            "decision provider {} is {:?}",
            provider.adapter_id, provider.status
        )));
    }

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
