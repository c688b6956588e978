//! Claims DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::SubmissionId;
use domain_claims::ClaimDecision;

/// One document described by the client; content is not uploaded
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentDto {
    pub name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EvaluateClaimRequest {
    #[validate(length(max = 32, message = "too many documents in one request"))]
    pub documents: Vec<DocumentDto>,
    /// Amount exactly as typed, e.g. "1000" or "250.50"
    #[validate(length(max = 64, message = "claim amount is too long"))]
    pub claim_amount: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateClaimResponse {
    pub submission_id: SubmissionId,
    pub decision: ClaimDecision,
}

#[derive(Debug, Serialize)]
pub struct IntakeRulesResponse {
    pub max_files: usize,
    pub max_file_size_bytes: u64,
    pub accepted_extensions: Vec<&'static str>,
}
