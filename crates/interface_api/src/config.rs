//! API configuration

use std::time::Duration;

use serde::Deserialize;

use domain_claims::adapters::SimulationSettings;
use domain_claims::WorkflowSettings;

/// API configuration
///
/// Every field has a default, so an empty environment yields a working
/// development server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Simulated analysis time before a decision
    pub decision_delay_ms: u64,
    /// Chance that the simulated provider approves a claim
    pub approval_probability: f64,
    /// Seed for reproducible simulated decisions
    pub decision_seed: Option<u64>,
    /// Upper bound on one evaluation; 0 disables the timeout
    pub decision_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            decision_delay_ms: 2000,
            approval_probability: 0.5,
            decision_seed: None,
            decision_timeout_ms: 30_000,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Settings for the simulated decision provider
    pub fn simulation_settings(&self) -> SimulationSettings {
        SimulationSettings {
            delay: Duration::from_millis(self.decision_delay_ms),
            approval_probability: self.approval_probability,
            seed: self.decision_seed,
            ..Default::default()
        }
    }

    /// Settings for each request's submission workflow
    pub fn workflow_settings(&self) -> WorkflowSettings {
        WorkflowSettings {
            decision_timeout: match self.decision_timeout_ms {
                0 => None,
                ms => Some(Duration::from_millis(ms)),
            },
        }
    }
}
