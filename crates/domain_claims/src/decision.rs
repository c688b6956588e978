//! Claim decisions and cost breakdowns

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

/// Category of an approved amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakdownCategory {
    SecurityDeposit,
    PetDeposit,
    OutstandingRent,
    Damages,
    Credits,
}

impl BreakdownCategory {
    pub const ALL: [BreakdownCategory; 5] = [
        BreakdownCategory::SecurityDeposit,
        BreakdownCategory::PetDeposit,
        BreakdownCategory::OutstandingRent,
        BreakdownCategory::Damages,
        BreakdownCategory::Credits,
    ];

    /// Label shown on the outcome panel
    pub fn label(&self) -> &'static str {
        match self {
            BreakdownCategory::SecurityDeposit => "Security Deposit",
            BreakdownCategory::PetDeposit => "Pet Deposit",
            BreakdownCategory::OutstandingRent => "Outstanding Rent",
            BreakdownCategory::Damages => "Damages",
            BreakdownCategory::Credits => "Credits",
        }
    }
}

impl fmt::Display for BreakdownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-category decomposition of an approved claim
///
/// Lines are not required to add up to the approved total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown {
    lines: BTreeMap<BreakdownCategory, Money>,
}

impl Breakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style line insertion
    pub fn with_line(mut self, category: BreakdownCategory, amount: Money) -> Self {
        self.lines.insert(category, amount);
        self
    }

    pub fn get(&self, category: BreakdownCategory) -> Option<Money> {
        self.lines.get(&category).copied()
    }

    /// Lines in display order
    pub fn lines(&self) -> impl Iterator<Item = (BreakdownCategory, Money)> + '_ {
        self.lines.iter().map(|(c, m)| (*c, *m))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Shares of the claimed amount assigned to each breakdown category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownPolicy {
    shares: Vec<(BreakdownCategory, Rate)>,
}

impl BreakdownPolicy {
    pub fn new(shares: Vec<(BreakdownCategory, Rate)>) -> Self {
        Self { shares }
    }

    /// Fixed 60/20/20/0/0 split used until a scoring service defines one
    pub fn placeholder() -> Self {
        Self::new(vec![
            (BreakdownCategory::SecurityDeposit, Rate::new(dec!(0.60))),
            (BreakdownCategory::PetDeposit, Rate::new(dec!(0.20))),
            (BreakdownCategory::OutstandingRent, Rate::new(dec!(0.20))),
            (BreakdownCategory::Damages, Rate::new(dec!(0))),
            (BreakdownCategory::Credits, Rate::new(dec!(0))),
        ])
    }

    pub fn shares(&self) -> &[(BreakdownCategory, Rate)] {
        &self.shares
    }

    /// Splits `total` into one line per configured category
    pub fn apply(&self, total: &Money) -> Breakdown {
        self.shares
            .iter()
            .fold(Breakdown::new(), |breakdown, (category, rate)| {
                breakdown.with_line(*category, rate.apply(total))
            })
    }
}

impl Default for BreakdownPolicy {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Outcome of a claim evaluation
///
/// Both variants are successful evaluations; they only differ in how they
/// are presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClaimDecision {
    Approved { total: Money, breakdown: Breakdown },
    Denied { reason: String },
}

impl ClaimDecision {
    /// Approves `total`, splitting it with `policy`
    pub fn approve(total: Money, policy: &BreakdownPolicy) -> Self {
        ClaimDecision::Approved {
            total,
            breakdown: policy.apply(&total),
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        ClaimDecision::Denied {
            reason: reason.into(),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, ClaimDecision::Approved { .. })
    }

    pub fn breakdown(&self) -> Option<&Breakdown> {
        match self {
            ClaimDecision::Approved { breakdown, .. } => Some(breakdown),
            ClaimDecision::Denied { .. } => None,
        }
    }
}

impl fmt::Display for ClaimDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimDecision::Approved { total, breakdown } => {
                writeln!(f, "Claim approved: {total}")?;
                for (category, amount) in breakdown.lines() {
                    writeln!(f, "  {category}: {amount}")?;
                }
                Ok(())
            }
            ClaimDecision::Denied { reason } => write!(f, "Claim denied: {reason}"),
        }
    }
}
