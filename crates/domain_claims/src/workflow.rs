//! Claim submission workflow
//!
//! An explicit state machine over the claimant's form: staged documents,
//! the entered amount and the submission state. Input arrives as
//! [`IntakeEvent`]s and every call to [`SubmissionWorkflow::handle`] reports
//! what changed as a [`Transition`], so the workflow can be driven and
//! tested without any rendering framework.
//!
//! # Submission lifecycle
//!
//! ```text
//! Idle ──Submit──► InFlight ──Ok(decision)──► Succeeded
//!   ▲                 │
//!   │                 └──────Err(error)─────► Failed
//!   └─────────── Submit (from Succeeded/Failed) ───┘
//! ```
//!
//! Submissions are not re-entrant: while a decision is pending further
//! submits are ignored, so at most one provider call is outstanding.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use core_kernel::{PortError, SubmissionId};

use crate::amount::{ClaimAmount, ClaimAmountField};
use crate::decision::ClaimDecision;
use crate::document::StagedFile;
use crate::error::IntakeError;
use crate::ports::DecisionProvider;
use crate::staging::FileStagingStore;

/// Prompt shown when an evaluation could not be completed
pub const RETRY_MESSAGE: &str = "We couldn't process your claim right now. Please try again.";

/// Submission state; exactly one holds at any time
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight { submission_id: SubmissionId },
    Succeeded { decision: ClaimDecision },
    Failed { message: String },
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight { .. })
    }
}

/// Input to the workflow
#[derive(Debug)]
pub enum IntakeEvent {
    FilesSelected(Vec<StagedFile>),
    FileRemoved(usize),
    AmountChanged(String),
    Submit,
    /// Result of the provider call started by a `Dispatched` transition
    DecisionResolved {
        submission_id: SubmissionId,
        outcome: Result<ClaimDecision, PortError>,
    },
}

/// Snapshot handed to the decision provider for one submission
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    pub submission_id: SubmissionId,
    pub files: Vec<StagedFile>,
    pub amount: ClaimAmount,
}

/// What a handled event did
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// A selection was staged
    Staged { count: usize },
    /// A staged document was removed
    Removed { file: StagedFile, count: usize },
    AmountUpdated,
    /// Input was refused; state is unchanged and the message should be shown
    Rejected(IntakeError),
    /// Idle/Succeeded/Failed moved to InFlight; the request must be evaluated
    Dispatched(EvaluationRequest),
    /// InFlight settled to Succeeded or Failed
    Settled {
        submission_id: SubmissionId,
        state: SubmissionState,
    },
    /// The event had no effect
    Ignored,
}

/// Tunables for the workflow
#[derive(Debug, Clone)]
pub struct WorkflowSettings {
    /// Upper bound on a provider call; `None` waits indefinitely
    pub decision_timeout: Option<Duration>,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            decision_timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Renderable view of the form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowView {
    pub files: Vec<StagedFile>,
    /// Documents that can still be attached
    pub remaining_slots: usize,
    /// False at capacity; the file picker must be disabled
    pub can_add_files: bool,
    pub amount: String,
    pub is_submitting: bool,
    pub result: Option<ClaimDecision>,
    pub error_message: Option<String>,
}

/// Claim submission state machine for one form instance
pub struct SubmissionWorkflow {
    files: FileStagingStore,
    amount: ClaimAmountField,
    state: SubmissionState,
    provider: Arc<dyn DecisionProvider>,
    settings: WorkflowSettings,
}

impl SubmissionWorkflow {
    pub fn new(provider: Arc<dyn DecisionProvider>) -> Self {
        Self::with_settings(provider, WorkflowSettings::default())
    }

    pub fn with_settings(provider: Arc<dyn DecisionProvider>, settings: WorkflowSettings) -> Self {
        Self {
            files: FileStagingStore::new(),
            amount: ClaimAmountField::new(),
            state: SubmissionState::Idle,
            provider,
            settings,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn files(&self) -> &FileStagingStore {
        &self.files
    }

    pub fn amount(&self) -> &ClaimAmountField {
        &self.amount
    }

    /// True while a decision is pending; the submit control must be disabled
    pub fn is_submitting(&self) -> bool {
        self.state.is_in_flight()
    }

    pub fn view(&self) -> WorkflowView {
        let (result, error_message) = match &self.state {
            SubmissionState::Succeeded { decision } => (Some(decision.clone()), None),
            SubmissionState::Failed { message } => (None, Some(message.clone())),
            _ => (None, None),
        };
        WorkflowView {
            files: self.files.list().to_vec(),
            remaining_slots: self.files.remaining_capacity(),
            can_add_files: !self.files.is_full(),
            amount: self.amount.raw().to_string(),
            is_submitting: self.is_submitting(),
            result,
            error_message,
        }
    }

    /// Applies one event
    pub fn handle(&mut self, event: IntakeEvent) -> Transition {
        match event {
            IntakeEvent::FilesSelected(selection) => match self.files.add_files(selection) {
                Ok(()) => Transition::Staged {
                    count: self.files.count(),
                },
                Err(error) => reject(error),
            },
            IntakeEvent::FileRemoved(index) => match self.files.remove_file(index) {
                Ok(file) => Transition::Removed {
                    file,
                    count: self.files.count(),
                },
                Err(error) => reject(error),
            },
            IntakeEvent::AmountChanged(raw) => {
                self.amount.set_amount(raw);
                Transition::AmountUpdated
            }
            IntakeEvent::Submit => self.begin_submission(),
            IntakeEvent::DecisionResolved {
                submission_id,
                outcome,
            } => self.resolve(submission_id, outcome),
        }
    }

    /// Submits the claim and waits for the decision
    ///
    /// Runs `Submit`, calls the provider for a dispatched request and feeds
    /// the outcome back through `DecisionResolved`. Any other transition
    /// (rejection, ignored submit) is returned as is.
    pub async fn submit(&mut self) -> Transition {
        match self.handle(IntakeEvent::Submit) {
            Transition::Dispatched(request) => {
                let outcome = self.evaluate(&request).await;
                self.handle(IntakeEvent::DecisionResolved {
                    submission_id: request.submission_id,
                    outcome,
                })
            }
            other => other,
        }
    }

    async fn evaluate(&self, request: &EvaluationRequest) -> Result<ClaimDecision, PortError> {
        let call = self.provider.evaluate(&request.files, &request.amount);
        match self.settings.decision_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| PortError::timeout("evaluate_claim", limit.as_millis() as u64))?,
            None => call.await,
        }
    }

    fn begin_submission(&mut self) -> Transition {
        if self.state.is_in_flight() {
            debug!("Submit ignored while a decision is pending");
            return Transition::Ignored;
        }
        if self.files.is_empty() {
            return reject(IntakeError::NoDocuments);
        }
        let amount = match self.amount.validate() {
            Ok(amount) => amount,
            Err(error) => return reject(error),
        };

        let request = EvaluationRequest {
            submission_id: SubmissionId::new_v7(),
            files: self.files.list().to_vec(),
            amount,
        };
        self.state = SubmissionState::InFlight {
            submission_id: request.submission_id,
        };

        info!(
            submission_id = %request.submission_id,
            documents = request.files.len(),
            total_bytes = self.files.total_size_bytes(),
            amount = %amount.money(),
            "Claim submitted for evaluation"
        );
        Transition::Dispatched(request)
    }

    fn resolve(
        &mut self,
        submission_id: SubmissionId,
        outcome: Result<ClaimDecision, PortError>,
    ) -> Transition {
        match &self.state {
            SubmissionState::InFlight { submission_id: pending } if *pending == submission_id => {}
            _ => {
                warn!(%submission_id, "Ignoring decision for a submission that is not pending");
                return Transition::Ignored;
            }
        }

        self.state = match outcome {
            Ok(decision) => {
                info!(%submission_id, approved = decision.is_approved(), "Claim evaluated");
                SubmissionState::Succeeded { decision }
            }
            Err(error) => {
                warn!(
                    %submission_id,
                    error = %error,
                    transient = error.is_transient(),
                    "Claim evaluation failed"
                );
                SubmissionState::Failed {
                    message: RETRY_MESSAGE.to_string(),
                }
            }
        };
        Transition::Settled {
            submission_id,
            state: self.state.clone(),
        }
    }
}

fn reject(error: IntakeError) -> Transition {
    debug!(%error, "Input rejected");
    Transition::Rejected(error)
}
