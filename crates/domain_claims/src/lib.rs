//! Claim Intake Domain
//!
//! This crate implements the claimant side of a deposit claim: attaching
//! documents, entering the claimed amount, and submitting both to a decision
//! provider that approves (with a cost breakdown) or denies the claim.
//!
//! # Intake flow
//!
//! ```text
//! select files -> enter amount -> submit -> evaluate -> Approved/Denied
//! ```

pub mod document;
pub mod staging;
pub mod amount;
pub mod decision;
pub mod ports;
pub mod adapters;
pub mod workflow;
pub mod error;

pub use document::{StagedFile, DocumentKind, MAX_FILE_SIZE_BYTES};
pub use staging::{FileStagingStore, MAX_STAGED_FILES};
pub use amount::{ClaimAmount, ClaimAmountField};
pub use decision::{ClaimDecision, Breakdown, BreakdownCategory, BreakdownPolicy};
pub use ports::DecisionProvider;
pub use workflow::{
    SubmissionWorkflow, SubmissionState, IntakeEvent, Transition, EvaluationRequest,
    WorkflowSettings, WorkflowView, RETRY_MESSAGE,
};
pub use error::IntakeError;
