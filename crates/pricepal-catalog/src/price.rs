//! Whole-unit rupee prices.
//!
//! The results grid shows prices without paise, so the amount is an unsigned
//! integer. Rounding happens once, when the API's decimal price is mapped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative price in whole rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Currency symbol used for display.
    pub const SYMBOL: &'static str = "\u{20b9}";

    /// Create a price from whole rupees.
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Create a price from a decimal amount, rounding half away from zero.
    ///
    /// Negative, NaN and infinite amounts clamp to zero.
    ///
    /// ```
    /// use pricepal_catalog::Price;
    /// assert_eq!(Price::from_amount(549.5).amount(), 550);
    /// assert_eq!(Price::from_amount(-3.0).amount(), 0);
    /// ```
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() || amount <= 0.0 {
            return Self(0);
        }
        // `as` saturates at u64::MAX for out-of-range values.
        Self(amount.round() as u64)
    }

    /// The amount in whole rupees.
    pub fn amount(&self) -> u64 {
        self.0
    }

    /// Format with symbol and Indian digit grouping (e.g. "₹1,23,456").
    pub fn display(&self) -> String {
        format!("{}{}", Self::SYMBOL, self.display_amount())
    }

    /// Format the grouped amount without symbol (e.g. "1,23,456").
    pub fn display_amount(&self) -> String {
        group_indian(self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

/// Group digits as 3 for the lowest group and 2 for every group above it.
fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
