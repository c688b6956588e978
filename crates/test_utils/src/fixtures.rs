//! Pre-built Test Fixtures
//!
//! Ready-to-use documents and amounts for intake tests. The named documents
//! mirror what claimants typically attach: a lease, a ledger and a deposit
//! waiver addendum.

use fake::faker::lorem::en::Word;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_claims::{ClaimAmount, DocumentKind, StagedFile};

/// Fixture for staged documents
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// A 1.2MB signed lease
    pub fn lease() -> StagedFile {
        StagedFile::new("lease_agreement.pdf", 1_258_291, b"%PDF-1.7 lease".to_vec())
    }

    /// A small ledger export
    pub fn ledger() -> StagedFile {
        StagedFile::new("ledger.docx", 48_213, b"ledger".to_vec())
    }

    /// A plain-text deposit waiver addendum
    pub fn addendum() -> StagedFile {
        StagedFile::new("deposit_waiver_addendum.txt", 2_048, b"addendum".to_vec())
    }

    /// A document with a random name and accepted extension
    pub fn random() -> StagedFile {
        let stem: String = Word().fake();
        let kind = DocumentKind::ACCEPTED[(0..DocumentKind::ACCEPTED.len()).fake::<usize>()];
        let size = (1_024u64..1_048_576u64).fake::<u64>();
        StagedFile::new(format!("{stem}{kind}"), size, Vec::new())
    }

    /// `n` random documents
    pub fn random_batch(n: usize) -> Vec<StagedFile> {
        (0..n).map(|_| Self::random()).collect()
    }

    /// The usual lease + ledger + addendum set
    pub fn claim_packet() -> Vec<StagedFile> {
        vec![Self::lease(), Self::ledger(), Self::addendum()]
    }
}

/// Fixture for claim amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// The amount used throughout the breakdown examples
    pub fn thousand() -> ClaimAmount {
        Self::of(dec!(1000.00))
    }

    pub fn of(value: Decimal) -> ClaimAmount {
        match ClaimAmount::new(value) {
            Ok(amount) => amount,
            Err(error) => panic!("fixture amount {value} rejected: {error}"),
        }
    }

    pub fn usd(value: Decimal) -> Money {
        Money::usd(value)
    }
}
