//! Staged claim documents
//!
//! A staged file is a document the claimant attached but has not submitted
//! yet. Its content is carried as an opaque handle and never parsed here.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::DocumentId;
use crate::error::IntakeError;

/// Largest document accepted at the input boundary (16 MiB)
pub const MAX_FILE_SIZE_BYTES: u64 = 16 * 1024 * 1024;

/// Document kinds accepted by the upload form, matched by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
    Txt,
}

impl DocumentKind {
    /// All accepted kinds, in the order the upload form lists them
    pub const ACCEPTED: [DocumentKind; 4] = [
        DocumentKind::Pdf,
        DocumentKind::Doc,
        DocumentKind::Docx,
        DocumentKind::Txt,
    ];

    /// Returns the file extension including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => ".pdf",
            DocumentKind::Doc => ".doc",
            DocumentKind::Docx => ".docx",
            DocumentKind::Txt => ".txt",
        }
    }

    /// Classifies a file name by its extension, ignoring case
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "doc" => Some(DocumentKind::Doc),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Txt),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One attached document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedFile {
    pub id: DocumentId,
    pub name: String,
    pub size_bytes: u64,
    pub kind: Option<DocumentKind>,
    /// Opaque file content; not serialized
    #[serde(skip)]
    content: Arc<Vec<u8>>,
    pub staged_at: DateTime<Utc>,
}

impl StagedFile {
    /// Creates a staged file without boundary checks
    pub fn new(name: impl Into<String>, size_bytes: u64, content: Vec<u8>) -> Self {
        let name = name.into();
        Self {
            id: DocumentId::new_v7(),
            kind: DocumentKind::from_file_name(&name),
            name,
            size_bytes,
            content: Arc::new(content),
            staged_at: Utc::now(),
        }
    }

    /// Creates a staged file from a user selection
    ///
    /// This is the input boundary: the name must be non-empty, the extension
    /// one of [`DocumentKind::ACCEPTED`] and the size at most
    /// [`MAX_FILE_SIZE_BYTES`].
    pub fn from_upload(
        name: impl Into<String>,
        size_bytes: u64,
        content: Vec<u8>,
    ) -> Result<Self, IntakeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(IntakeError::EmptyFileName);
        }
        if DocumentKind::from_file_name(&name).is_none() {
            return Err(IntakeError::UnsupportedFileType(name));
        }
        if size_bytes > MAX_FILE_SIZE_BYTES {
            return Err(IntakeError::FileTooLarge {
                name,
                size_bytes,
                max_bytes: MAX_FILE_SIZE_BYTES,
            });
        }
        Ok(Self::new(name, size_bytes, content))
    }

    /// Read-only view of the opaque content
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Size in megabytes with one decimal, e.g. "1.2MB"
    pub fn size_display(&self) -> String {
        format!("{:.1}MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}
