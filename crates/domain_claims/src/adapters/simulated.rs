//! Simulated Decision Provider
//!
//! Stand-in for the document-analysis service. After a fixed delay it
//! approves or denies at random; nothing about the documents or the amount
//! influences the outcome. Approved claims are split with
//! [`BreakdownPolicy::placeholder`].
//!
//! The draw is uniform and, unless a seed is configured, not reproducible.
//! It is a placeholder, not a business rule.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError};

use crate::amount::ClaimAmount;
use crate::decision::{BreakdownPolicy, ClaimDecision};
use crate::document::StagedFile;
use crate::ports::DecisionProvider;

const ADAPTER_ID: &str = "simulated-decision-provider";

/// Reason returned with every simulated denial
pub const SIMULATED_DENIAL_REASON: &str =
    "The submitted documents do not support the claimed amount.";

/// Configuration for the simulated adapter
#[derive(Debug, Clone)]
pub struct SimulationSettings {
    /// Time spent "analyzing" before answering
    pub delay: Duration,
    /// Chance of approval, clamped to `0.0..=1.0`
    pub approval_probability: f64,
    /// Seed for reproducible demos; entropy when `None`
    pub seed: Option<u64>,
    pub breakdown_policy: BreakdownPolicy,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(2000),
            approval_probability: 0.5,
            seed: None,
            breakdown_policy: BreakdownPolicy::placeholder(),
        }
    }
}

/// Randomized decision provider
#[derive(Debug)]
pub struct SimulatedDecisionProvider {
    settings: SimulationSettings,
    rng: Mutex<StdRng>,
}

impl SimulatedDecisionProvider {
    pub fn new(mut settings: SimulationSettings) -> Self {
        settings.approval_probability = if settings.approval_probability.is_nan() {
            0.0
        } else {
            settings.approval_probability.clamp(0.0, 1.0)
        };
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            settings,
            rng: Mutex::new(rng),
        }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    fn draw_approval(&self) -> Result<bool, PortError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| PortError::internal("simulation rng lock poisoned"))?;
        Ok(rng.gen_bool(self.settings.approval_probability))
    }
}

impl Default for SimulatedDecisionProvider {
    fn default() -> Self {
        Self::new(SimulationSettings::default())
    }
}

impl DomainPort for SimulatedDecisionProvider {}

#[async_trait]
impl HealthCheckable for SimulatedDecisionProvider {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy(ADAPTER_ID)
    }
}

#[async_trait]
impl DecisionProvider for SimulatedDecisionProvider {
    async fn evaluate(
        &self,
        files: &[StagedFile],
        amount: &ClaimAmount,
    ) -> Result<ClaimDecision, PortError> {
        debug!(
            documents = files.len(),
            amount = %amount.money(),
            delay_ms = self.settings.delay.as_millis() as u64,
            "Simulating claim evaluation"
        );

        if !self.settings.delay.is_zero() {
            tokio::time::sleep(self.settings.delay).await;
        }

        let decision = if self.draw_approval()? {
            ClaimDecision::approve(amount.money(), &self.settings.breakdown_policy)
        } else {
            ClaimDecision::deny(SIMULATED_DENIAL_REASON)
        };

        info!(approved = decision.is_approved(), "Simulated decision issued");
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::BreakdownCategory;
    use core_kernel::{AdapterHealth, Money};
    use rust_decimal_macros::dec;

    fn provider(probability: f64, seed: Option<u64>) -> SimulatedDecisionProvider {
        SimulatedDecisionProvider::new(SimulationSettings {
            delay: Duration::ZERO,
            approval_probability: probability,
            seed,
            ..Default::default()
        })
    }

    fn claim() -> (Vec<StagedFile>, ClaimAmount) {
        (
            vec![StagedFile::new("lease.pdf", 2048, vec![])],
            ClaimAmount::new(dec!(1000)).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_always_approve_uses_placeholder_split() {
        let (files, amount) = claim();
        let decision = provider(1.0, None).evaluate(&files, &amount).await.unwrap();

        let breakdown = decision.breakdown().expect("approved");
        assert_eq!(
            breakdown.get(BreakdownCategory::SecurityDeposit),
            Some(Money::usd(dec!(600)))
        );
    }

    #[tokio::test]
    async fn test_always_deny_gives_static_reason() {
        let (files, amount) = claim();
        let decision = provider(0.0, None).evaluate(&files, &amount).await.unwrap();
        assert_eq!(decision, ClaimDecision::deny(SIMULATED_DENIAL_REASON));
    }

    #[tokio::test]
    async fn test_seeded_providers_agree() {
        let (files, amount) = claim();
        let a = provider(0.5, Some(7));
        let b = provider(0.5, Some(7));

        for _ in 0..10 {
            let left = a.evaluate(&files, &amount).await.unwrap();
            let right = b.evaluate(&files, &amount).await.unwrap();
            assert_eq!(left.is_approved(), right.is_approved());
        }
    }

    #[test]
    fn test_probability_is_clamped() {
        assert_eq!(provider(3.0, None).settings().approval_probability, 1.0);
        assert_eq!(provider(-1.0, None).settings().approval_probability, 0.0);
        assert_eq!(provider(f64::NAN, None).settings().approval_probability, 0.0);
    }

    #[tokio::test]
    async fn test_health_check() {
        let health = SimulatedDecisionProvider::default().health_check().await;
        assert_eq!(health.status, AdapterHealth::Healthy);
        assert_eq!(health.adapter_id, "simulated-decision-provider");
    }
}
