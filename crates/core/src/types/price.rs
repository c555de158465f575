//! Type-safe price representation in minor currency units.
//!
//! The shop prices everything in whole Argentine pesos, so a [`Price`] is an
//! unsigned integer amount with no fractional part. Being unsigned, a price,
//! a line subtotal and a cart total can never be negative; arithmetic
//! saturates rather than wrapping.

use core::fmt;
use core::iter::Sum;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a whole, non-negative number.
    #[error("price must be a whole number, got {0:?}")]
    NotANumber(String),
}

/// An amount of money in the smallest currency unit.
///
/// ## Examples
///
/// ```
/// use girlsshop_core::Price;
///
/// let unit = Price::new(4500);
/// assert_eq!(unit.times(2), Price::new(9000));
/// assert_eq!(unit.to_string(), "$4500");
/// assert_eq!("$4500".parse::<Price>().unwrap(), unit);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A price of nothing; the total of an empty cart.
    pub const ZERO: Self = Self(0);

    /// Currency symbol used when displaying prices.
    pub const SYMBOL: &'static str = "$";

    /// Create a new price from an amount in minor units.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in minor units.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// Sum of two prices.
    #[must_use]
    pub const fn plus(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::SYMBOL, self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    /// Parses `"4500"` or `"$4500"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(Self::SYMBOL).unwrap_or(trimmed).trim();
        if digits.is_empty() {
            return Err(PriceError::Empty);
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| PriceError::NotANumber(s.to_owned()))
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::plus)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display_has_no_separators() {
        assert_eq!(Price::new(10000).to_string(), "$10000");
        assert_eq!(Price::ZERO.to_string(), "$0");
    }

    #[test]
    fn test_price_times_and_sum() {
        let total: Price = [Price::new(100).times(2), Price::new(50).times(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(250));
    }

    #[test]
    fn test_price_saturates() {
        let huge = Price::new(u64::MAX);
        assert_eq!(huge.times(3), Price::new(u64::MAX));
        assert_eq!(huge.plus(Price::new(1)), Price::new(u64::MAX));
    }

    #[test]
    fn test_price_parse() {
        assert_eq!("4500".parse::<Price>().unwrap(), Price::new(4500));
        assert_eq!(" $ 3500 ".parse::<Price>().unwrap(), Price::new(3500));
        assert_eq!("$".parse::<Price>(), Err(PriceError::Empty));
        assert!(matches!(
            "-5".parse::<Price>(),
            Err(PriceError::NotANumber(_))
        ));
        assert!(matches!(
            "12.50".parse::<Price>(),
            Err(PriceError::NotANumber(_))
        ));
    }
}
