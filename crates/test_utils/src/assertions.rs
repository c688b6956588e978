//! Custom Test Assertions
//!
//! Assertion helpers for transitions and decisions that print the whole
//! value on failure instead of a bare `false`.

use rust_decimal::Decimal;

use domain_claims::{
    BreakdownCategory, ClaimDecision, IntakeError, SubmissionState, Transition,
};

/// Asserts that a transition is a rejection with exactly `expected`
pub fn assert_rejected(transition: &Transition, expected: &IntakeError) {
    match transition {
        Transition::Rejected(actual) => assert_eq!(actual, expected, "wrong rejection"),
        other => panic!("Expected rejection {expected:?}, got {other:?}"),
    }
}

/// Asserts that a transition settled successfully and returns the decision
pub fn assert_succeeded(transition: &Transition) -> &ClaimDecision {
    match transition {
        Transition::Settled { state: SubmissionState::Succeeded { decision }, .. } => decision,
        other => panic!("Expected a successful evaluation, got {other:?}"),
    }
}

/// Asserts that a transition settled as failed and returns the message
pub fn assert_failed(transition: &Transition) -> &str {
    match transition {
        Transition::Settled { state: SubmissionState::Failed { message }, .. } => message,
        other => panic!("Expected a failed evaluation, got {other:?}"),
    }
}

/// Asserts an approved decision with the given total and breakdown lines
pub fn assert_approved_breakdown(
    decision: &ClaimDecision,
    total: Decimal,
    lines: &[(BreakdownCategory, Decimal)],
) {
    let ClaimDecision::Approved { total: actual_total, breakdown } = decision else {
        panic!("Expected an approved decision, got {decision:?}");
    };
    assert_eq!(actual_total.amount(), total, "approved total");
    for (category, expected) in lines {
        let actual = breakdown
            .get(*category)
            .unwrap_or_else(|| panic!("missing breakdown line {category}"));
        assert_eq!(actual.amount(), *expected, "breakdown line {category}");
    }
}
