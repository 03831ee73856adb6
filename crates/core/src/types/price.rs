//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the store's single currency.
///
/// Arithmetic saturates instead of panicking, so absurd cart quantities
/// produce a clamped total rather than aborting the process.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: i64) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("${:.2}", self.0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::from(150).times(1), Price::from(160).times(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from(470));
    }

    #[test]
    fn test_times_zero_and_negative() {
        assert_eq!(Price::from(99).times(0), Price::ZERO);
        assert_eq!(Price::from(10).times(-2), Price::from(-20));
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from(110).to_string(), "$110.00");
        let cents = Price::new(Decimal::new(1999, 2));
        assert_eq!(format!("{cents}"), "$19.99");
        assert_eq!(format!("{cents:>8}"), "  $19.99");
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let from_str: Price = serde_json::from_str("\"150.50\"").unwrap();
        let from_num: Price = serde_json::from_str("150").unwrap();
        assert_eq!(from_str, Price::new(Decimal::new(15050, 2)));
        assert_eq!(from_num, Price::from(150));
    }
}
