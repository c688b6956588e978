//! Claim Intake API Server Binary
//!
//! Starts the HTTP intake API backed by the simulated decision provider.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claim-intake-api
//!
//! # Fast, always-approving decisions for a demo
//! API_DECISION_DELAY_MS=0 API_APPROVAL_PROBABILITY=1.0 cargo run --bin claim-intake-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `API_DECISION_DELAY_MS` - Simulated analysis time (default: 2000)
//! * `API_APPROVAL_PROBABILITY` - Simulated approval chance (default: 0.5)
//! * `API_DECISION_SEED` - Seed for reproducible decisions (default: unseeded)
//! * `API_DECISION_TIMEOUT_MS` - Evaluation timeout, 0 to disable (default: 30000)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use domain_claims::adapters::SimulatedDecisionProvider;
use interface_api::{create_router, config::ApiConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid API_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        decision_delay_ms = config.decision_delay_ms,
        approval_probability = config.approval_probability,
        "Starting claim intake API server"
    );

    let provider = Arc::new(SimulatedDecisionProvider::new(config.simulation_settings()));
    let app = create_router(provider, config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
