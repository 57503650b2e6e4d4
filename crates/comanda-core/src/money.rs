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
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cash drawer reconciled with floats drifts by a cent here and there  │
//! │  until the closing report disagrees with the physical till.             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $2.25 = 225 cents, always exact                                      │
//! │    Addition is associative, so day totals never depend on row order    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use comanda_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(225); // $2.25
//!
//! // Or parse a decimal string coming from a stored file
//! let parsed: Money = "2.25".parse().unwrap();
//! assert_eq!(parsed, price);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // $4.50
//! let total = price + Money::from_cents(150);    // $3.75
//!
//! // NEVER do this:
//! // let bad = Money::from_float(2.25); // NO SUCH METHOD EXISTS!
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values (a loss-making day has a
///   negative net profit)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **String serde**: Serializes as a 2-decimal string (`"2.25"`) so CSV
///   columns stay human-readable and round-trip exactly
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  MenuItem.price ──► quantity × price ──► Order.total                    │
/// │                                                                         │
/// │  Order.total ──► sales by payment method ──► closing report rows        │
/// │                                                                         │
/// │  Expense.amount ──► total expenses ──► net profit / cash on hand        │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use comanda_core::money::Money;
    ///
    /// let price = Money::from_cents(225); // Represents $2.25
    /// assert_eq!(price.cents(), 225);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The stores, calculations, and reports all use cents.
    /// Only rendering converts to dollars for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use comanda_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.dollars(), 10);
    ///
    /// let negative = Money::from_cents(-550);
    /// assert_eq!(negative.dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use comanda_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents_part(), 99);
    ///
    /// let negative = Money::from_cents(-550);
    /// assert_eq!(negative.cents_part(), 50); // Absolute value
    /// ```
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use comanda_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(225); // $2.25
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 675); // $6.75
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Item: Hamburguesas - Italiana $2.25
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $6.75
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Parses a decimal string into a Money value.
    ///
    /// ## Accepted Forms
    /// ```text
    /// "2.25"  → 225 cents
    /// "2.5"   → 250 cents   (one fractional digit)
    /// "2"     → 200 cents   (no fractional part)
    /// "10.0"  → 1000 cents  (legacy float rendering)
    /// "-3.50" → -350 cents
    /// ```
    ///
    /// Rejects anything else: more than two fractional digits, a bare
    /// fraction (`.5`), thousands separators, currency symbols.
    ///
    /// ## Why Not f64 Parsing?
    /// Going through a float would reintroduce the representation errors
    /// this type exists to avoid. The string is split on `.` and both
    /// halves are parsed as integers.
    pub fn from_decimal_str(s: &str) -> Result<Self, ParseMoneyError> {
        let invalid = || ParseMoneyError {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (unsigned, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let dollars: i64 = whole.parse().map_err(|_| invalid())?;
        let cents_frac: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_frac))
            .ok_or_else(invalid)?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Renders the value as a plain decimal string with exactly two
    /// fractional digits and no currency symbol: `"2.25"`, `"-3.50"`.
    ///
    /// This is the wire form used in every persisted CSV column and in
    /// report exports. Guaranteed to round-trip through
    /// [`from_decimal_str`](Money::from_decimal_str).
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// Error returned when a string is not a valid decimal money amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid money amount: {input:?}")]
pub struct ParseMoneyError {
    /// The rejected input, verbatim.
    pub input: String,
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. Persisted files use
/// [`to_decimal_string`](Money::to_decimal_string), which has no `$`.
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

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_decimal_str(s)
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over iterators of Money (closing math sums many totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Serde (string form, shared with the CSV stores)
// =============================================================================

/// Serializes as the plain 2-decimal string, e.g. `"2.25"`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

/// Deserializes from a decimal string, accepting the legacy forms
/// documented on [`from_decimal_str`](Money::from_decimal_str).
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl Visitor<'_> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal money amount such as \"2.25\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Money, E> {
                Money::from_decimal_str(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(MoneyVisitor)
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
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(225).to_decimal_string(), "2.25");
        assert_eq!(Money::from_cents(1000).to_decimal_string(), "10.00");
        assert_eq!(Money::from_cents(-350).to_decimal_string(), "-3.50");
        assert_eq!(Money::zero().to_decimal_string(), "0.00");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
    }

    #[test]
    fn test_parse_two_decimals() {
        assert_eq!(Money::from_decimal_str("2.25").unwrap().cents(), 225);
        assert_eq!(Money::from_decimal_str("0.05").unwrap().cents(), 5);
        assert_eq!(Money::from_decimal_str("-3.50").unwrap().cents(), -350);
    }

    #[test]
    fn test_parse_legacy_forms() {
        // Older files wrote whole-dollar amounts as "10.0"
        assert_eq!(Money::from_decimal_str("10.0").unwrap().cents(), 1000);
        assert_eq!(Money::from_decimal_str("2.5").unwrap().cents(), 250);
        assert_eq!(Money::from_decimal_str("2").unwrap().cents(), 200);
        assert_eq!(Money::from_decimal_str(" 7.75 ").unwrap().cents(), 775);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::from_decimal_str("").is_err());
        assert!(Money::from_decimal_str("abc").is_err());
        assert!(Money::from_decimal_str("1.234").is_err());
        assert!(Money::from_decimal_str(".5").is_err());
        assert!(Money::from_decimal_str("1..2").is_err());
        assert!(Money::from_decimal_str("$2.25").is_err());
        assert!(Money::from_decimal_str("2,25").is_err());
    }

    #[test]
    fn test_parse_round_trip() {
        for cents in [0, 5, 50, 225, 1099, -350, 123456] {
            let money = Money::from_cents(cents);
            let parsed = Money::from_decimal_str(&money.to_decimal_string()).unwrap();
            assert_eq!(parsed, money);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let totals = [Money::from_cents(500), Money::from_cents(750)];
        let sum: Money = totals.iter().copied().sum();
        assert_eq!(sum.cents(), 1250);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(225);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 675);
    }
}
