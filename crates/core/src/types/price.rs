//! Type-safe price representation using decimal arithmetic.
//!
//! Cart totals are computed with `rust_decimal` so that repeated addition of
//! prices like `35.99` stays exact. Prices serialize their amount as a string
//! (`"35.99"`) via the `serde-with-str` feature.

use core::fmt;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Create a price from the smallest currency unit (e.g., cents for USD).
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(cents, 2), currency_code)
    }

    /// This price multiplied by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Add for Price {
    type Output = Self;

    /// Adds two prices. Both operands must share a currency; the storefront
    /// only ever deals in one currency per session.
    fn add(self, rhs: Self) -> Self {
        debug_assert_eq!(self.currency_code, rhs.currency_code);
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Price {
    /// Format for display (e.g., "$19.99").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount.round_dp(2)
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The display symbol for this currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(3599, CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::new(3599, 2));
    }

    #[test]
    fn test_times() {
        let price = Price::from_cents(1099, CurrencyCode::USD);
        assert_eq!(price.times(3), Price::from_cents(3297, CurrencyCode::USD));
    }

    #[test]
    fn test_add() {
        let a = Price::from_cents(1000, CurrencyCode::USD);
        let b = Price::from_cents(599, CurrencyCode::USD);
        assert_eq!(a + b, Price::from_cents(1599, CurrencyCode::USD));
    }

    #[test]
    fn test_zero() {
        assert!(Price::zero(CurrencyCode::USD).is_zero());
    }

    #[test]
    fn test_display() {
        let price = Price::from_cents(3599, CurrencyCode::USD);
        assert_eq!(price.to_string(), "$35.99");

        let price = Price::from_cents(500, CurrencyCode::GBP);
        assert_eq!(price.to_string(), "\u{a3}5.00");
    }

    #[test]
    fn test_serde_amount_as_string() {
        let price = Price::from_cents(3599, CurrencyCode::USD);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, r#"{"amount":"35.99","currency_code":"USD"}"#);

        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
