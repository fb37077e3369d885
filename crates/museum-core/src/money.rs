//! # Money Module
//!
//! Provides the `Money` type used for every admission price and surcharge.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing dollars as floats:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Prices live in the table as cents, receipt totals are summed as     │
//! │    cents, and only Display divides by 100.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use museum_core::money::Money;
//!
//! let admission = Money::from_cents(3000);
//! let total = admission + Money::from_cents(1000);
//! assert_eq!(total.to_string(), "$40.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Serializes as a bare integer, which is how price tables store amounts:
/// `"adult": 3000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use museum_core::money::Money;
    ///
    /// let price = Money::from_cents(2500); // $25.00
    /// assert_eq!(price.cents(), 2500);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    ///
    /// ## Example
    /// ```rust
    /// use museum_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(4550).dollars(), 45);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use museum_core::money::Money;
    ///
    /// assert_eq!(
    ///     Money::from_cents(3000).checked_add(Money::from_cents(1000)),
    ///     Some(Money::from_cents(4000))
    /// );
    /// assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    /// ```
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Money(result)),
            None => None,
        }
    }

    /// Sums amounts, returning `None` if any partial sum overflows.
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC`, the format printed on every receipt line and total.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Sums an iterator of surcharges or line prices.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(4550);
        assert_eq!(money.cents(), 4550);
        assert_eq!(money.dollars(), 45);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(17500)), "$175.00");
        assert_eq!(format!("{}", Money::from_cents(3000)), "$30.00");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Money::from_cents(3000);
        total += Money::from_cents(1000);
        assert_eq!((total + Money::from_cents(1000)).cents(), 5000);
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::zero()), Some(max));
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_checked_sum() {
        let lines = [Money::from_cents(5000), Money::from_cents(3500)];
        assert_eq!(Money::checked_sum(lines), Some(Money::from_cents(8500)));
        assert_eq!(Money::checked_sum([]), Some(Money::zero()));

        let huge = Money::from_cents(5_000_000_000_000_000_000);
        assert_eq!(Money::checked_sum([huge, huge]), None);
    }

    #[test]
    fn test_sum() {
        let lines = [
            Money::from_cents(5000),
            Money::from_cents(3500),
            Money::from_cents(4500),
            Money::from_cents(4500),
        ];
        let total: Money = lines.iter().sum();
        assert_eq!(total.cents(), 17500);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_serde_is_bare_integer() {
        let json = serde_json::to_string(&Money::from_cents(1200)).unwrap();
        assert_eq!(json, "1200");

        let parsed: Money = serde_json::from_str("2300").unwrap();
        assert_eq!(parsed, Money::from_cents(2300));
    }
}
