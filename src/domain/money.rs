use std::str::FromStr;

use rust_decimal::Decimal;

/// A strictly positive currency amount parsed from untrusted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money(Decimal);

impl Money {
    /// Accepts a finite, strictly positive decimal number. Anything else,
    /// including scientific notation, is rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let amount = Decimal::from_str(text).ok()?;
        if amount <= Decimal::ZERO {
            return None;
        }
        Some(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
