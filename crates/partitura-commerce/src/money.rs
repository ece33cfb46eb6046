//! Money type for monetary values.
//!
//! Amounts are stored in minor units (cents) to avoid the floating-point
//! precision issues that plague monetary arithmetic. The storefront sells in
//! euros; a couple of other currencies are supported for completeness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    EUR,
    USD,
    GBP,
}

impl Currency {
    /// Get the ISO currency code (e.g., "EUR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "€").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::EUR => "\u{20ac}",
            Currency::USD => "$",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// The amount is held in cents, so `Money::from_decimal(12.5, Currency::EUR)`
/// is 1250 cents and displays as "€12.50".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use partitura_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(12.50, Currency::EUR);
    /// assert_eq!(price.amount_cents, 1250);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "€12.50").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Format the amount alone, two decimals, no symbol (e.g., "12.50").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }

    /// Try to add another Money value, `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_cents.checked_sub(other.amount_cents)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar, `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a scalar, saturating at the representable bounds.
    pub fn saturating_multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Add another Money value, saturating on overflow.
    ///
    /// # Panics
    /// Panics on currency mismatch, like `+`.
    pub fn saturating_add(&self, other: &Money) -> Money {
        assert_eq!(
            self.currency, other.currency,
            "Currency mismatch in addition"
        );
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }

    /// Multiply by a decimal factor, rounding to the nearest cent.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let amount = (self.amount_cents as f64 * factor).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.multiply_decimal(percent / 100.0)
    }

    /// Sum an iterator of Money values, `None` on mismatch or overflow.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch. Use [`Money::try_add`] for fallible addition.
    fn add(self, other: Money) -> Money {
        self.try_add(&other).expect("Currency mismatch in addition")
    }
}

impl Sub for Money {
    type Output = Money;

    /// # Panics
    /// Panics on currency mismatch. Use [`Money::try_subtract`] instead.
    fn sub(self, other: Money) -> Money {
        self.try_subtract(&other)
            .expect("Currency mismatch in subtraction")
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.amount_cents * factor, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal() {
        let m = Money::from_decimal(12.50, Currency::EUR);
        assert_eq!(m.amount_cents, 1250);

        let m = Money::from_decimal(24.199999, Currency::EUR);
        assert_eq!(m.amount_cents, 2420);
    }

    #[test]
    fn test_display() {
        let m = Money::new(1250, Currency::EUR);
        assert_eq!(m.display(), "\u{20ac}12.50");
        assert_eq!(m.display_amount(), "12.50");

        let m = Money::new(999, Currency::GBP);
        assert_eq!(m.display(), "\u{00a3}9.99");
    }

    #[test]
    fn test_addition_and_subtraction() {
        let a = Money::new(1000, Currency::EUR);
        let b = Money::new(250, Currency::EUR);
        assert_eq!((a + b).amount_cents, 1250);
        assert_eq!((a - b).amount_cents, 750);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let eur = Money::new(100, Currency::EUR);
        let usd = Money::new(100, Currency::USD);
        assert!(eur.try_add(&usd).is_none());
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::EUR);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_saturating_arithmetic() {
        let m = Money::new(i64::MAX, Currency::EUR);
        assert_eq!(m.saturating_multiply(2).amount_cents, i64::MAX);
        assert_eq!(m.saturating_add(&m).amount_cents, i64::MAX);

        let small = Money::new(100, Currency::EUR);
        assert_eq!(small.saturating_multiply(3).amount_cents, 300);
        assert_eq!(small.saturating_add(&small).amount_cents, 200);
    }

    #[test]
    fn test_percentage_rounds_to_cent() {
        let m = Money::new(2000, Currency::EUR); // €20.00
        let tax = m.percentage(21.0);
        assert_eq!(tax.amount_cents, 420); // €4.20
    }

    #[test]
    fn test_try_sum() {
        let values = vec![
            Money::new(100, Currency::EUR),
            Money::new(200, Currency::EUR),
            Money::new(300, Currency::EUR),
        ];
        let total = Money::try_sum(values.iter(), Currency::EUR).unwrap();
        assert_eq!(total.amount_cents, 600);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("XXX"), None);
    }
}
