//! Claim intake errors

use thiserror::Error;

/// Errors that can occur while a claimant prepares and submits a claim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("Selection of {requested} file(s) would exceed the limit of {max} (currently {current})")]
    CapacityExceeded { current: usize, requested: usize, max: usize },

    #[error("No staged file at index {index} (staged: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("File {name} is {size_bytes} bytes, limit is {max_bytes}")]
    FileTooLarge { name: String, size_bytes: u64, max_bytes: u64 },

    #[error("File name is empty")]
    EmptyFileName,

    #[error("At least one document is required")]
    NoDocuments,

    #[error("Claim amount is required")]
    MissingAmount,

    #[error("Invalid claim amount: {0:?}")]
    InvalidAmount(String),
}

impl IntakeError {
    /// Message suitable for showing to the claimant
    pub fn user_message(&self) -> String {
        match self {
            IntakeError::CapacityExceeded { max, .. } => {
                format!("You can only upload up to {max} files in total")
            }
            IntakeError::IndexOutOfRange { .. } => "That document is no longer attached".to_string(),
            IntakeError::UnsupportedFileType(_) => {
                "Only PDF, Word (.doc, .docx) and text files are accepted".to_string()
            }
            IntakeError::FileTooLarge { name, .. } => format!("{name} is larger than 16MB"),
            IntakeError::EmptyFileName => "Selected file has no name".to_string(),
            IntakeError::NoDocuments => "Please upload at least one document".to_string(),
            IntakeError::MissingAmount => "Please enter the claim amount".to_string(),
            IntakeError::InvalidAmount(_) => {
                "Please enter a valid, non-negative claim amount".to_string()
            }
        }
    }
}
