//! File staging store
//!
//! Holds the documents attached before submission, in the order they were
//! selected, and enforces the five-document limit.

use tracing::debug;

use crate::document::StagedFile;
use crate::error::IntakeError;

/// Maximum number of documents a claim may carry
pub const MAX_STAGED_FILES: usize = 5;

/// Ordered set of staged documents
#[derive(Debug, Clone, Default)]
pub struct FileStagingStore {
    files: Vec<StagedFile>,
}

impl FileStagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a selection after the existing entries
    ///
    /// The selection is added as a whole or not at all: if it would take the
    /// store past [`MAX_STAGED_FILES`] nothing is added.
    pub fn add_files(&mut self, selection: Vec<StagedFile>) -> Result<(), IntakeError> {
        let current = self.files.len();
        let requested = selection.len();
        if current + requested > MAX_STAGED_FILES {
            return Err(IntakeError::CapacityExceeded {
                current,
                requested,
                max: MAX_STAGED_FILES,
            });
        }

        self.files.extend(selection);
        debug!(added = requested, count = self.files.len(), "Staged documents");
        Ok(())
    }

    /// Removes the entry at `index`, keeping the others in order
    pub fn remove_file(&mut self, index: usize) -> Result<StagedFile, IntakeError> {
        if index >= self.files.len() {
            return Err(IntakeError::IndexOutOfRange {
                index,
                len: self.files.len(),
            });
        }

        let removed = self.files.remove(index);
        debug!(index, name = %removed.name, count = self.files.len(), "Removed staged document");
        Ok(removed)
    }

    pub fn count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// True once no further document can be attached
    pub fn is_full(&self) -> bool {
        self.files.len() >= MAX_STAGED_FILES
    }

    pub fn remaining_capacity(&self) -> usize {
        MAX_STAGED_FILES.saturating_sub(self.files.len())
    }

    /// Read-only view in staging order
    pub fn list(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn total_size_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size_bytes).sum()
    }
}
