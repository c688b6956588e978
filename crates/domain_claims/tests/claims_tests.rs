//! Comprehensive tests for domain_claims

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use rust_decimal_macros::dec;

use domain_claims::adapters::{SimulatedDecisionProvider, SimulationSettings};
use domain_claims::{
    BreakdownCategory, ClaimAmountField, ClaimDecision, FileStagingStore, IntakeError,
    IntakeEvent, SubmissionState, Transition, MAX_STAGED_FILES, RETRY_MESSAGE,
};
use test_utils::{
    assert_approved_breakdown, assert_failed, assert_rejected, assert_succeeded,
    selection_sequence_strategy, selection_strategy, valid_amount_input_strategy,
    negative_amount_input_strategy, AmountFixtures, DocumentFixtures, ScriptedDecisionProvider,
    ScriptedOutcome, TestWorkflowBuilder,
};

fn approved_1000() -> ClaimDecision {
    ClaimDecision::approve(AmountFixtures::usd(dec!(1000.00)), &Default::default())
}

// ============================================================================
// File Staging Store Tests
// ============================================================================

mod staging_tests {
    use super::*;

    #[test]
    fn test_claim_packet_fits() {
        let mut store = FileStagingStore::new();
        store.add_files(DocumentFixtures::claim_packet()).unwrap();
        assert_eq!(store.count(), 3);
        assert_eq!(store.list()[0].name, "lease_agreement.pdf");
    }

    #[test]
    fn test_sixth_file_is_rejected() {
        let mut store = FileStagingStore::new();
        store.add_files(DocumentFixtures::random_batch(5)).unwrap();

        let result = store.add_files(vec![DocumentFixtures::lease()]);

        assert_eq!(
            result,
            Err(IntakeError::CapacityExceeded { current: 5, requested: 1, max: 5 })
        );
        assert_eq!(store.count(), 5);
    }

    #[test]
    fn test_remove_then_add_again() {
        let mut store = FileStagingStore::new();
        store.add_files(DocumentFixtures::random_batch(5)).unwrap();
        store.remove_file(0).unwrap();
        assert!(store.add_files(vec![DocumentFixtures::ledger()]).is_ok());
        assert_eq!(store.list()[4].name, "ledger.docx");
    }

    proptest! {
        #[test]
        fn count_never_exceeds_capacity(selections in selection_sequence_strategy()) {
            let mut store = FileStagingStore::new();
            for selection in selections {
                let before: Vec<_> = store.list().iter().map(|f| f.id).collect();
                let requested = selection.len();
                match store.add_files(selection) {
                    Ok(()) => prop_assert_eq!(store.count(), before.len() + requested),
                    Err(IntakeError::CapacityExceeded { .. }) => {
                        let after: Vec<_> = store.list().iter().map(|f| f.id).collect();
                        prop_assert_eq!(after, before);
                    }
                    Err(other) => prop_assert!(false, "unexpected error {:?}", other),
                }
                prop_assert!(store.count() <= MAX_STAGED_FILES);
            }
        }

        #[test]
        fn removal_preserves_order(selection in selection_strategy(), index in 0usize..8) {
            let mut store = FileStagingStore::new();
            prop_assume!(store.add_files(selection).is_ok());
            let before: Vec<_> = store.list().iter().map(|f| f.id).collect();

            match store.remove_file(index) {
                Ok(removed) => {
                    let mut expected = before.clone();
                    expected.remove(index);
                    prop_assert_eq!(removed.id, before[index]);
                    let after: Vec<_> = store.list().iter().map(|f| f.id).collect();
                    prop_assert_eq!(after, expected);
                }
                Err(error) => {
                    prop_assert!(index >= before.len());
                    prop_assert_eq!(error, IntakeError::IndexOutOfRange { index, len: before.len() });
                    let after: Vec<_> = store.list().iter().map(|f| f.id).collect();
                    prop_assert_eq!(after, before);
                }
            }
        }
    }
}

// ============================================================================
// Claim Amount Tests
// ============================================================================

mod amount_tests {
    use super::*;

    fn validate(raw: &str) -> Result<rust_decimal::Decimal, IntakeError> {
        let mut field = ClaimAmountField::new();
        field.set_amount(raw);
        field.validate().map(|a| a.value())
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(validate(""), Err(IntakeError::MissingAmount));
        assert!(matches!(validate("-1"), Err(IntakeError::InvalidAmount(_))));
        assert_eq!(validate("250.50"), Ok(dec!(250.50)));
    }

    proptest! {
        #[test]
        fn valid_input_round_trips((raw, value) in valid_amount_input_strategy()) {
            prop_assert_eq!(validate(&raw), Ok(value));
        }

        #[test]
        fn negative_input_is_invalid(raw in negative_amount_input_strategy()) {
            prop_assert_eq!(validate(&raw), Err(IntakeError::InvalidAmount(raw.clone())));
        }
    }
}

// ============================================================================
// Submission Workflow Tests
// ============================================================================

mod workflow_tests {
    use super::*;

    #[tokio::test]
    async fn test_no_documents_fails_first_precondition() {
        let provider = Arc::new(ScriptedDecisionProvider::answering(approved_1000()));
        let mut workflow = TestWorkflowBuilder::new()
            .with_provider(provider.clone())
            .without_documents()
            .build();

        let transition = workflow.submit().await;

        assert_rejected(&transition, &IntakeError::NoDocuments);
        assert_eq!(workflow.state(), &SubmissionState::Idle);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_amount_fails_second_precondition() {
        let provider = Arc::new(ScriptedDecisionProvider::answering(approved_1000()));
        let mut workflow = TestWorkflowBuilder::new()
            .with_provider(provider.clone())
            .without_amount()
            .build();

        let transition = workflow.submit().await;

        assert_rejected(&transition, &IntakeError::MissingAmount);
        assert_eq!(
            IntakeError::MissingAmount.user_message(),
            "Please enter the claim amount"
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_one_document_and_1000_is_split_60_20_20() {
        let provider = Arc::new(SimulatedDecisionProvider::new(SimulationSettings {
            delay: Duration::ZERO,
            approval_probability: 1.0,
            ..Default::default()
        }));
        let mut workflow = TestWorkflowBuilder::new().with_provider(provider).build();

        let transition = workflow.submit().await;

        let decision = assert_succeeded(&transition);
        assert_approved_breakdown(
            decision,
            dec!(1000.00),
            &[
                (BreakdownCategory::SecurityDeposit, dec!(600.00)),
                (BreakdownCategory::PetDeposit, dec!(200.00)),
                (BreakdownCategory::OutstandingRent, dec!(200.00)),
                (BreakdownCategory::Damages, dec!(0.00)),
                (BreakdownCategory::Credits, dec!(0.00)),
            ],
        );
    }

    #[tokio::test]
    async fn test_denied_is_still_a_successful_evaluation() {
        let provider = Arc::new(ScriptedDecisionProvider::answering(ClaimDecision::deny(
            "Lease does not name the claimant",
        )));
        let mut workflow = TestWorkflowBuilder::new().with_provider(provider).build();

        let transition = workflow.submit().await;

        assert!(!assert_succeeded(&transition).is_approved());
        assert!(workflow.view().error_message.is_none());
    }

    #[tokio::test]
    async fn test_provider_receives_snapshot_once() {
        let provider = Arc::new(ScriptedDecisionProvider::answering(approved_1000()));
        let mut workflow = TestWorkflowBuilder::new()
            .with_provider(provider.clone())
            .with_documents(DocumentFixtures::claim_packet())
            .with_amount("1000")
            .build();

        workflow.submit().await;

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].file_names,
            vec!["lease_agreement.pdf", "ledger.docx", "deposit_waiver_addendum.txt"]
        );
        assert_eq!(calls[0].amount, AmountFixtures::thousand().money());
        assert_eq!(workflow.files().count(), 3);
        assert_eq!(workflow.amount().raw(), "1000");
    }

    #[test]
    fn test_submit_while_in_flight_does_not_dispatch_again() {
        let mut workflow = TestWorkflowBuilder::new().build();

        let Transition::Dispatched(request) = workflow.handle(IntakeEvent::Submit) else {
            panic!("first submit should dispatch");
        };
        assert_eq!(workflow.handle(IntakeEvent::Submit), Transition::Ignored);
        assert_eq!(workflow.handle(IntakeEvent::Submit), Transition::Ignored);
        assert!(workflow.view().is_submitting);

        let settled = workflow.handle(IntakeEvent::DecisionResolved {
            submission_id: request.submission_id,
            outcome: Ok(approved_1000()),
        });
        assert!(assert_succeeded(&settled).is_approved());
        assert!(!workflow.is_submitting());
    }

    #[tokio::test]
    async fn test_failed_then_resubmit_clears_error() {
        let provider = Arc::new(ScriptedDecisionProvider::new([
            ScriptedOutcome::ConnectionFailure("upstream reset".to_string()),
            ScriptedOutcome::Decision(approved_1000()),
        ]));
        let mut workflow = TestWorkflowBuilder::new().with_provider(provider.clone()).build();

        let first = workflow.submit().await;
        assert_eq!(assert_failed(&first), RETRY_MESSAGE);
        assert_eq!(workflow.view().error_message.as_deref(), Some(RETRY_MESSAGE));

        let Transition::Dispatched(_) = workflow.handle(IntakeEvent::Submit) else {
            panic!("resubmit should dispatch");
        };
        assert!(workflow.view().error_message.is_none());
        assert!(workflow.view().result.is_none());
    }

    #[tokio::test]
    async fn test_failed_then_resubmit_reaches_fresh_success() {
        let provider = Arc::new(ScriptedDecisionProvider::new([
            ScriptedOutcome::ConnectionFailure("upstream reset".to_string()),
            ScriptedOutcome::Decision(approved_1000()),
        ]));
        let mut workflow = TestWorkflowBuilder::new().with_provider(provider.clone()).build();

        workflow.submit().await;
        let second = workflow.submit().await;

        assert!(assert_succeeded(&second).is_approved());
        assert!(workflow.view().error_message.is_none());
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_slow_provider_times_out_to_failed() {
        let provider = Arc::new(
            ScriptedDecisionProvider::answering(approved_1000())
                .with_delay(Duration::from_millis(200)),
        );
        let mut workflow = TestWorkflowBuilder::new()
            .with_provider(provider)
            .with_timeout(Some(Duration::from_millis(10)))
            .build();

        let transition = workflow.submit().await;

        assert_eq!(assert_failed(&transition), RETRY_MESSAGE);
        assert!(!workflow.is_submitting());
    }

    #[tokio::test]
    async fn test_success_result_replaced_on_new_submission() {
        let provider = Arc::new(ScriptedDecisionProvider::new([
            ScriptedOutcome::Decision(approved_1000()),
            ScriptedOutcome::Decision(ClaimDecision::deny("Duplicate claim")),
        ]));
        let mut workflow = TestWorkflowBuilder::new().with_provider(provider).build();

        workflow.submit().await;
        workflow.handle(IntakeEvent::AmountChanged("500".to_string()));
        workflow.submit().await;

        assert_eq!(
            workflow.state(),
            &SubmissionState::Succeeded { decision: ClaimDecision::deny("Duplicate claim") }
        );
    }

    #[test]
    fn test_capacity_rejection_surfaces_user_message() {
        let mut workflow = TestWorkflowBuilder::new()
            .with_documents(DocumentFixtures::random_batch(4))
            .build();

        let transition = workflow.handle(IntakeEvent::FilesSelected(DocumentFixtures::random_batch(2)));

        let Transition::Rejected(error) = transition else {
            panic!("expected rejection");
        };
        assert_eq!(error.user_message(), "You can only upload up to 5 files in total");
        assert_eq!(workflow.files().count(), 4);
    }

    #[test]
    fn test_remove_out_of_range_through_workflow() {
        let mut workflow = TestWorkflowBuilder::new().build();

        let transition = workflow.handle(IntakeEvent::FileRemoved(3));

        assert_rejected(&transition, &IntakeError::IndexOutOfRange { index: 3, len: 1 });
        assert_eq!(workflow.files().count(), 1);
    }
}
