//! Claims handlers

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use domain_claims::{
    DocumentKind, IntakeEvent, StagedFile, SubmissionState, SubmissionWorkflow, Transition,
    MAX_FILE_SIZE_BYTES, MAX_STAGED_FILES,
};

use crate::{AppState, error::ApiError};
use crate::dto::claims::*;

/// Evaluates a claim in one round trip
///
/// Runs the same workflow a form would: stage the described documents,
/// enter the amount, submit and wait for the decision.
pub async fn evaluate_claim(
    State(state): State<AppState>,
    Json(request): Json<EvaluateClaimRequest>,
) -> Result<Json<EvaluateClaimResponse>, ApiError> {
    request.validate()?;

    let documents = request
        .documents
        .into_iter()
        .map(|doc| StagedFile::from_upload(doc.name, doc.size_bytes, Vec::new()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut workflow =
        SubmissionWorkflow::with_settings(state.provider.clone(), state.config.workflow_settings());

    if let Transition::Rejected(error) = workflow.handle(IntakeEvent::FilesSelected(documents)) {
        return Err(error.into());
    }
    workflow.handle(IntakeEvent::AmountChanged(request.claim_amount));

    match workflow.submit().await {
        Transition::Settled {
            submission_id,
            state: SubmissionState::Succeeded { decision },
        } => {
            info!(%submission_id, approved = decision.is_approved(), "Claim evaluated via API");
            Ok(Json(EvaluateClaimResponse {
                submission_id,
                decision,
            }))
        }
        Transition::Settled {
            state: SubmissionState::Failed { message },
            ..
        } => Err(ApiError::EvaluationFailed(message)),
        Transition::Rejected(error) => Err(error.into()),
        other => Err(ApiError::Internal(format!("unexpected transition: {other:?}"))),
    }
}

/// Limits the upload form enforces
pub async fn intake_rules() -> Json<IntakeRulesResponse> {
    Json(IntakeRulesResponse {
        max_files: MAX_STAGED_FILES,
        max_file_size_bytes: MAX_FILE_SIZE_BYTES,
        accepted_extensions: DocumentKind::ACCEPTED.iter().map(|k| k.extension()).collect(),
    })
}
