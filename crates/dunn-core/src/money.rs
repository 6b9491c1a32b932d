//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    2.49 + 8.95 = 11.440000000000001  ❌ WRONG!                          │
//! │    11.44 * 0.9 = 10.296 → is it $10.29 or $10.30?                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    249 + 895 = 1144 cents                                               │
//! │    90% of 1144 = 1029.6 → 1030 cents (half-up on the total)             │
//! │    1030 cents = $10.30                                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dunn_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(249); // $2.49
//!
//! // Parse what a customer typed
//! let budget: Money = "3.00".parse().unwrap();
//!
//! assert!(price <= budget);
//! assert_eq!((price + Money::from_cents(895)).to_string(), "$11.44");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction never panics on underflow of a total
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  MenuItem.price ──► OrderResult.lines ──► subtotal                      │
/// │                                              │                          │
/// │                                              ▼                          │
/// │                          student discount ──► total                     │
/// │                                              │                          │
/// │                                              ▼                          │
/// │                          priority fee ──► PriorityAdjustment.total      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::money::Money;
    ///
    /// let price = Money::from_cents(895); // Represents $8.95
    /// assert_eq!(price.cents(), 895);
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

    /// Returns the dollars portion.
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1144).dollars(), 11);
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

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discounted total itself is rounded half-up to the nearest cent,
    /// so $20.25 at 10% off is $18.23.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(1144); // $11.44
    /// let discounted = subtotal.apply_percentage_discount(1000); // 10% off
    /// assert_eq!(discounted.cents(), 1030); // $10.30
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // i128 keeps the intermediate product from overflowing
        let keep_bps = 10000 - discount_bps as i128;
        let discounted = (self.0 as i128 * keep_bps + 5000) / 10000;
        Money::from_cents(discounted as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$X.XX`, the format used on every receipt line.
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

/// Parses a dollar amount as a customer would type it.
///
/// Accepts `3`, `3.`, `3.5`, `3.00`, `$3.00`, `.99` and a leading `-`.
/// More than two decimal places is rejected rather than silently rounded.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let text = s.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let text = text.strip_prefix('$').unwrap_or(text);
        let (major, minor) = text.split_once('.').unwrap_or((text, ""));

        if major.is_empty() && minor.is_empty() {
            return Err(invalid("expected a dollar amount such as 3.00"));
        }
        if !major.chars().chain(minor.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected a dollar amount such as 3.00"));
        }
        if minor.len() > 2 {
            return Err(invalid("at most two decimal places are allowed"));
        }

        let too_large = || invalid("amount is too large");
        let major: i64 = if major.is_empty() {
            0
        } else {
            major.parse().map_err(|_| too_large())?
        };
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| too_large())? * 10,
            _ => minor.parse().map_err(|_| too_large())?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

/// Default money is zero.
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

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
        let money = Money::from_cents(1144);
        assert_eq!(money.cents(), 1144);
        assert_eq!(money.dollars(), 11);
        assert_eq!(money.cents_part(), 44);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1030)), "$10.30");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut c = a;
        c += b;
        c -= Money::from_cents(100);
        assert_eq!(c.cents(), 1400);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(249), Money::from_cents(895)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 1144);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percentage_discount_rounds_half_up() {
        // 90% of $11.44 is 1029.6 cents → 1030
        assert_eq!(Money::from_cents(1144).apply_percentage_discount(1000).cents(), 1030);
        // 90% of $20.25 is 1822.5 cents → 1823
        assert_eq!(Money::from_cents(2025).apply_percentage_discount(1000).cents(), 1823);
        // 90% of $10.05 is 904.5 cents → 905
        assert_eq!(Money::from_cents(1005).apply_percentage_discount(1000).cents(), 905);
        assert_eq!(Money::from_cents(10000).apply_percentage_discount(0).cents(), 10000);
    }

    #[test]
    fn test_parse_accepts_customer_input() {
        assert_eq!("3".parse::<Money>().unwrap().cents(), 300);
        assert_eq!("3.".parse::<Money>().unwrap().cents(), 300);
        assert_eq!("3.5".parse::<Money>().unwrap().cents(), 350);
        assert_eq!("3.00".parse::<Money>().unwrap().cents(), 300);
        assert_eq!(" $8.95 ".parse::<Money>().unwrap().cents(), 895);
        assert_eq!(".99".parse::<Money>().unwrap().cents(), 99);
        assert_eq!("-1.25".parse::<Money>().unwrap().cents(), -125);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("3.999".parse::<Money>().is_err());
        assert!("1,000".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::default();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(Money::from_cents(-1).is_negative());
    }
}
