//! HTTP Intake API
//!
//! This crate exposes the claim intake workflow over HTTP using Axum. Each
//! evaluation request runs its own submission workflow against the shared
//! decision provider; nothing is persisted between requests.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for claims and health
//! - **Middleware**: Request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(provider, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_claims::DecisionProvider;

use crate::config::ApiConfig;
use crate::middleware::request_log_middleware;
use crate::handlers::{claims, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn DecisionProvider>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `provider` - Decision provider used by every evaluation
/// * `config` - API configuration
pub fn create_router(provider: Arc<dyn DecisionProvider>, config: ApiConfig) -> Router {
    let state = AppState { provider, config };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let claims_routes = Router::new()
        .route("/evaluate", post(claims::evaluate_claim))
        .route("/intake-rules", get(claims::intake_rules));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
