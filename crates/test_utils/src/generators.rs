//! Property-Based Test Generators
//!
//! Proptest strategies for staged documents, selections and amount input.

use proptest::prelude::*;
use rust_decimal::Decimal;

use domain_claims::{DocumentKind, StagedFile};

/// Strategy for one of the accepted document kinds
pub fn document_kind_strategy() -> impl Strategy<Value = DocumentKind> {
    prop_oneof![
        Just(DocumentKind::Pdf),
        Just(DocumentKind::Doc),
        Just(DocumentKind::Docx),
        Just(DocumentKind::Txt),
    ]
}

/// Strategy for a staged document with an accepted extension
pub fn staged_file_strategy() -> impl Strategy<Value = StagedFile> {
    ("[a-z][a-z0-9_]{0,15}", document_kind_strategy(), 0u64..20_000_000u64)
        .prop_map(|(stem, kind, size)| StagedFile::new(format!("{stem}{kind}"), size, Vec::new()))
}

/// Strategy for one file-picker selection (possibly empty, possibly too large)
pub fn selection_strategy() -> impl Strategy<Value = Vec<StagedFile>> {
    prop::collection::vec(staged_file_strategy(), 0..=7)
}

/// Strategy for a sequence of selections
pub fn selection_sequence_strategy() -> impl Strategy<Value = Vec<Vec<StagedFile>>> {
    prop::collection::vec(selection_strategy(), 0..10)
}

/// Strategy for non-negative amounts in cents, rendered as typed input
pub fn valid_amount_input_strategy() -> impl Strategy<Value = (String, Decimal)> {
    (0i64..100_000_000i64).prop_map(|cents| {
        let value = Decimal::new(cents, 2);
        (value.to_string(), value)
    })
}

/// Strategy for negative amounts rendered as typed input
pub fn negative_amount_input_strategy() -> impl Strategy<Value = String> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2).to_string())
}
