//! Claim Decision Ports
//!
//! The decision provider turns a claim (staged documents plus amount) into an
//! approval decision. The submission workflow only knows this trait, so the
//! simulated adapter can be replaced by a real scoring service without
//! touching the workflow.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_claims::adapters::SimulatedDecisionProvider;
//! use domain_claims::workflow::SubmissionWorkflow;
//!
//! let provider = Arc::new(SimulatedDecisionProvider::default());
//! let mut workflow = SubmissionWorkflow::new(provider);
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError};

use crate::amount::ClaimAmount;
use crate::decision::ClaimDecision;
use crate::document::StagedFile;

/// Port for evaluating a claim
///
/// Implementations receive shared references only; they cannot change the
/// staged documents or the entered amount. The workflow calls `evaluate` at
/// most once per accepted submission.
#[async_trait]
pub trait DecisionProvider: DomainPort + HealthCheckable {
    /// Evaluates a claim
    ///
    /// # Returns
    ///
    /// `Approved` or `Denied` on a completed evaluation, or a `PortError`
    /// when the evaluation itself could not be carried out.
    async fn evaluate(
        &self,
        files: &[StagedFile],
        amount: &ClaimAmount,
    ) -> Result<ClaimDecision, PortError>;
}
