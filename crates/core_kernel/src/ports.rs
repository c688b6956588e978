//! Ports and Adapters Infrastructure
//!
//! Collaborators that sit outside the intake domain (today only the claim
//! decision service) are reached through port traits. Each port extends the
//! marker traits here so adapters can be swapped at startup.
//!
//! ```text
//!   Submission Workflow ──► DecisionProvider (port)
//!                               ▲            ▲
//!                               │            │
//!                    Simulated adapter   Remote scoring service
//! ```

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error type for port operations
///
/// All adapters report failures through this type so the caller can treat a
/// simulated and a remote collaborator the same way.
#[derive(Debug, Error)]
pub enum PortError {
    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation timed out
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Timeout error
    pub fn timeout(operation: impl fmt::Display, duration_ms: u64) -> Self {
        PortError::Timeout {
            operation: operation.to_string(),
            duration_ms,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. } | PortError::Timeout { .. }
        )
    }
}

/// Marker trait for all domain ports
///
/// Ports must be shareable across tasks so one adapter instance can serve
/// every workflow in a process.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    Healthy,
    Degraded,
    Unhealthy,
    Unknown,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthCheckResult {
    /// A healthy result for the given adapter, stamped now
    pub fn healthy(adapter_id: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: None,
            checked_at: chrono::Utc::now(),
        }
    }

    pub fn is_operational(&self) -> bool {
        matches!(self.status, AdapterHealth::Healthy | AdapterHealth::Degraded)
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_transient() {
        let timeout = PortError::timeout("evaluate_claim", 5000);
        assert!(timeout.is_transient());
        assert_eq!(timeout.to_string(), "Timeout after 5000ms: evaluate_claim");

        assert!(PortError::connection("refused").is_transient());
        assert!(!PortError::internal("script exhausted").is_transient());
    }

    #[test]
    fn test_health_check_result() {
        let healthy = HealthCheckResult::healthy("simulated");
        assert!(healthy.is_operational());

        let down = HealthCheckResult {
            status: AdapterHealth::Unhealthy,
            ..healthy
        };
        assert!(!down.is_operational());
    }
}
