//! Dress prices.
//!
//! Prices are decimal amounts with at most two fractional digits. They are
//! stored as whole cents so the database never sees a float.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CoreError;

/// Fractional digits a price may carry.
const PRICE_SCALE: u32 = 2;

/// A non-negative price, held in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Build a price from a cent amount, rejecting negative values.
    pub fn from_cents(cents: i64) -> Result<Self, CoreError> {
        if cents < 0 {
            return Err(CoreError::Validation(format!(
                "Price must not be negative, got {cents} cents"
            )));
        }
        Ok(Self(cents))
    }

    /// Build a price from a decimal amount such as `100.50`.
    pub fn from_decimal(amount: Decimal) -> Result<Self, CoreError> {
        if amount.is_sign_negative() {
            return Err(CoreError::Validation(format!(
                "Price must not be negative, got '{amount}'"
            )));
        }
        if amount.scale() > PRICE_SCALE {
            return Err(CoreError::Validation(format!(
                "Price must have at most {PRICE_SCALE} decimal places, got '{amount}'"
            )));
        }

        let mut scaled = amount;
        scaled.rescale(PRICE_SCALE);
        let cents = i64::try_from(scaled.mantissa())
            .map_err(|_| CoreError::Validation(format!("Price '{amount}' is too large")))?;
        Self::from_cents(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn amount(self) -> Decimal {
        Decimal::new(self.0, PRICE_SCALE)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount().round_dp(PRICE_SCALE))
    }
}

/// Format a stored cent amount as a decimal with two fractional digits.
pub fn format_cents(cents: i64) -> String {
    Decimal::new(cents, PRICE_SCALE).round_dp(PRICE_SCALE).to_string()
}

impl FromStr for Price {
    type Err = CoreError;

    /// Parse `"100"`, `"100.5"` or `"100.50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // `Decimal` accepts a bare trailing point; a form field does not.
        if s.ends_with('.') {
            return Err(CoreError::Validation(format!("Invalid price '{s}'")));
        }
        let amount = Decimal::from_str(s)
            .map_err(|e| CoreError::Validation(format!("Invalid price '{s}': {e}")))?;
        Self::from_decimal(amount)
    }
}
