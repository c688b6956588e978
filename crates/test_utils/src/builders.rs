//! Test Data Builders
//!
//! Builds a [`SubmissionWorkflow`] already holding documents and an amount,
//! so tests only spell out the parts of the form they care about.

use std::sync::Arc;
use std::time::Duration;

use domain_claims::{
    DecisionProvider, IntakeEvent, StagedFile, SubmissionWorkflow, Transition, WorkflowSettings,
};

use crate::fixtures::DocumentFixtures;
use crate::providers::ScriptedDecisionProvider;

/// Builder for workflows in a prepared state
pub struct TestWorkflowBuilder {
    provider: Arc<dyn DecisionProvider>,
    documents: Vec<StagedFile>,
    amount: Option<String>,
    settings: WorkflowSettings,
}

impl Default for TestWorkflowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkflowBuilder {
    /// A lease and an amount of 1000, answered by an empty script
    pub fn new() -> Self {
        Self {
            provider: Arc::new(ScriptedDecisionProvider::default()),
            documents: vec![DocumentFixtures::lease()],
            amount: Some("1000".to_string()),
            settings: WorkflowSettings::default(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn DecisionProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_documents(mut self, documents: Vec<StagedFile>) -> Self {
        self.documents = documents;
        self
    }

    pub fn without_documents(self) -> Self {
        self.with_documents(Vec::new())
    }

    pub fn with_amount(mut self, raw: impl Into<String>) -> Self {
        self.amount = Some(raw.into());
        self
    }

    pub fn without_amount(mut self) -> Self {
        self.amount = None;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.settings.decision_timeout = timeout;
        self
    }

    /// Builds the workflow and replays documents and amount as events
    pub fn build(self) -> SubmissionWorkflow {
        let mut workflow = SubmissionWorkflow::with_settings(self.provider, self.settings);
        if !self.documents.is_empty() {
            let staged = workflow.handle(IntakeEvent::FilesSelected(self.documents));
            assert!(
                matches!(staged, Transition::Staged { .. }),
                "builder documents were not staged: {staged:?}"
            );
        }
        if let Some(raw) = self.amount {
            workflow.handle(IntakeEvent::AmountChanged(raw));
        }
        workflow
    }
}
