//! Scripted Decision Providers
//!
//! Deterministic stand-ins for [`DecisionProvider`] that answer from a queue
//! and record every call, so tests can assert on the number of evaluations
//! and on what the workflow handed over.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, Money, PortError};
use domain_claims::{ClaimAmount, ClaimDecision, DecisionProvider, StagedFile};

/// One scripted answer
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    Decision(ClaimDecision),
    /// Fails with `PortError::Connection` carrying this message
    ConnectionFailure(String),
}

/// What the provider saw on one call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub file_names: Vec<String>,
    pub amount: Money,
}

/// Decision provider answering from a script
#[derive(Debug, Default)]
pub struct ScriptedDecisionProvider {
    outcomes: Mutex<VecDeque<ScriptedOutcome>>,
    calls: Mutex<Vec<RecordedCall>>,
    delay: Duration,
}

impl ScriptedDecisionProvider {
    pub fn new(outcomes: impl IntoIterator<Item = ScriptedOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        }
    }

    /// Provider with one queued answer
    pub fn answering(decision: ClaimDecision) -> Self {
        Self::new([ScriptedOutcome::Decision(decision)])
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new([ScriptedOutcome::ConnectionFailure(message.into())])
    }

    /// Waits `delay` before answering each call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Queues another answer
    pub fn push(&self, outcome: ScriptedOutcome) {
        lock(&self.outcomes).push_back(outcome);
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DomainPort for ScriptedDecisionProvider {}

#[async_trait]
impl HealthCheckable for ScriptedDecisionProvider {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("scripted-decision-provider")
    }
}

#[async_trait]
impl DecisionProvider for ScriptedDecisionProvider {
    async fn evaluate(
        &self,
        files: &[StagedFile],
        amount: &ClaimAmount,
    ) -> Result<ClaimDecision, PortError> {
        lock(&self.calls).push(RecordedCall {
            file_names: files.iter().map(|f| f.name.clone()).collect(),
            amount: amount.money(),
        });
        let next = lock(&self.outcomes).pop_front();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match next {
            Some(ScriptedOutcome::Decision(decision)) => Ok(decision),
            Some(ScriptedOutcome::ConnectionFailure(message)) => Err(PortError::connection(message)),
            None => Err(PortError::internal("decision script exhausted")),
        }
    }
}
