//! Claim amount entry and validation

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money};
use crate::error::IntakeError;

/// A validated, non-negative claim amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimAmount(Money);

impl ClaimAmount {
    /// Claims are entered in dollars
    pub const CURRENCY: Currency = Currency::USD;

    /// Wraps a decimal, rejecting negative values
    pub fn new(value: Decimal) -> Result<Self, IntakeError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(IntakeError::InvalidAmount(value.to_string()));
        }
        Ok(Self(Money::new(value, Self::CURRENCY)))
    }

    pub fn value(&self) -> Decimal {
        self.0.amount()
    }

    pub fn money(&self) -> Money {
        self.0
    }
}

/// The amount input as the claimant typed it
///
/// The raw text is kept verbatim, including intermediate states such as an
/// empty string, and only interpreted by [`ClaimAmountField::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimAmountField {
    raw: String,
}

impl ClaimAmountField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_amount(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parses the raw input
    ///
    /// Plain decimals and scientific notation (as a browser number input
    /// allows) are accepted; surrounding whitespace is ignored. Digit
    /// separators such as `1_000` or `1,000` are not.
    pub fn validate(&self) -> Result<ClaimAmount, IntakeError> {
        let trimmed = self.raw.trim();
        if trimmed.is_empty() {
            return Err(IntakeError::MissingAmount);
        }
        if !trimmed.chars().all(is_number_char) {
            return Err(IntakeError::InvalidAmount(self.raw.clone()));
        }

        let value = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| IntakeError::InvalidAmount(self.raw.clone()))?;

        ClaimAmount::new(value).map_err(|_| IntakeError::InvalidAmount(self.raw.clone()))
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}
