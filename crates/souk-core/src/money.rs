//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  The original back-office kept prices as JS numbers:                │
//! │    20 * 1.15 = 22.999999999999996 on a bad day                      │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Piasters                                     │
//! │    2000 piasters at a 1500 bps margin = exactly 2300 piasters       │
//! │    Rounding is explicit, never accidental                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use souk_core::money::Money;
//!
//! // Create from piasters (preferred)
//! let cost = Money::from_piasters(2000); // E£20.00
//!
//! // Arithmetic operations
//! let line_total = cost * 2;                        // E£40.00
//! let grand = line_total + Money::from_piasters(4500); // E£85.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::MarginRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in piasters (the smallest unit of the
/// Egyptian pound, 1/100 E£).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for overpaid invoice remainders
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// InvoiceItem.cost_price ──► Pricing Deriver ──► InvoiceItem.selling_price
///          │
///          └──► InvoiceItem.total ──► Invoice.total_amount
///                                          │
///          Invoice.paid_amount ────────────┤
///                                          ▼
///                              Invoice.remaining_amount ──► Vendor.balance
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from piasters (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use souk_core::money::Money;
    ///
    /// let price = Money::from_piasters(2300); // Represents E£23.00
    /// assert_eq!(price.piasters(), 2300);
    /// ```
    #[inline]
    pub const fn from_piasters(piasters: i64) -> Self {
        Money(piasters)
    }

    /// Creates a Money value from pounds and piasters.
    ///
    /// ## Example
    /// ```rust
    /// use souk_core::money::Money;
    ///
    /// let price = Money::from_pounds_piasters(45, 50); // E£45.50
    /// assert_eq!(price.piasters(), 4550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the pounds part should be negative.
    /// `from_pounds_piasters(-5, 50)` = -E£5.50, not -E£4.50
    #[inline]
    pub const fn from_pounds_piasters(pounds: i64, piasters: i64) -> Self {
        if pounds < 0 {
            Money(pounds * 100 - piasters)
        } else {
            Money(pounds * 100 + piasters)
        }
    }

    /// Returns the value in piasters (smallest currency unit).
    #[inline]
    pub const fn piasters(&self) -> i64 {
        self.0
    }

    /// Returns the pounds portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the piasters portion (always 0-99).
    #[inline]
    pub const fn piasters_part(&self) -> i64 {
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Applies a profit margin and returns the marked-up amount.
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(amount × (10000 + bps) + 5000) / 10000`.
    /// i128 intermediates prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use souk_core::money::Money;
    /// use souk_core::types::MarginRate;
    ///
    /// let cost = Money::from_piasters(2000);   // E£20.00
    /// let margin = MarginRate::from_bps(1500); // 15%
    ///
    /// // E£20.00 × 1.15 = E£23.00
    /// assert_eq!(cost.with_margin(margin).piasters(), 2300);
    /// ```
    pub fn with_margin(&self, margin: MarginRate) -> Money {
        // margin.bps() is basis points: 1500 = 15%
        // A negative margin (markdown) is allowed and simply reduces the price.
        let factor = 10000 + margin.bps() as i128;
        let marked_up = (self.0 as i128 * factor + 5000) / 10000;
        Money::from_piasters(marked_up as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use souk_core::money::Money;
    ///
    /// let cost = Money::from_piasters(2000); // E£20.00
    /// let line_total = cost.multiply_quantity(2);
    /// assert_eq!(line_total.piasters(), 4000); // E£40.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Parses a user-entered amount string, coercing anything invalid to zero.
    ///
    /// ## Why So Forgiving?
    /// Numeric form fields arrive as free text. The posting rules treat a
    /// missing or garbled amount as zero rather than an error, so the draft
    /// stays open for correction instead of blowing up mid-entry.
    ///
    /// ## Example
    /// ```rust
    /// use souk_core::money::Money;
    ///
    /// assert_eq!(Money::parse_or_zero("23.50").piasters(), 2350);
    /// assert_eq!(Money::parse_or_zero("85").piasters(), 8500);
    /// assert_eq!(Money::parse_or_zero("").piasters(), 0);
    /// assert_eq!(Money::parse_or_zero("abc").piasters(), 0);
    /// ```
    pub fn parse_or_zero(input: &str) -> Money {
        let input = input.trim();
        if input.is_empty() {
            return Money::zero();
        }

        let (sign, digits) = match input.strip_prefix('-') {
            Some(rest) => (-1i64, rest),
            None => (1i64, input),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Money::zero();
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            match whole.parse() {
                Ok(v) => v,
                Err(_) => return Money::zero(),
            }
        };

        // Keep at most two fractional digits, right-padded with zeros
        let mut frac = frac.to_string();
        frac.truncate(2);
        while frac.len() < 2 {
            frac.push('0');
        }
        let frac: i64 = frac.parse().unwrap_or(0);

        // An amount too large for the piaster conversion is garbage input
        // like any other and coerces to zero rather than overflowing.
        match whole.checked_mul(100).and_then(|w| w.checked_add(frac)) {
            Some(piasters) => Money::from_piasters(sign * piasters),
            None => Money::zero(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Actual UI display is the frontend's
/// job, where localization is handled properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}E£{}.{:02}",
            sign,
            self.pounds().abs(),
            self.piasters_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

/// Sum of an iterator of Money values (for invoice totals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_piasters() {
        let money = Money::from_piasters(2350);
        assert_eq!(money.piasters(), 2350);
        assert_eq!(money.pounds(), 23);
        assert_eq!(money.piasters_part(), 50);
    }

    #[test]
    fn test_from_pounds_piasters() {
        let money = Money::from_pounds_piasters(23, 50);
        assert_eq!(money.piasters(), 2350);

        let negative = Money::from_pounds_piasters(-5, 50);
        assert_eq!(negative.piasters(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_piasters(2350)), "E£23.50");
        assert_eq!(format!("{}", Money::from_piasters(500)), "E£5.00");
        assert_eq!(format!("{}", Money::from_piasters(-550)), "-E£5.50");
        assert_eq!(format!("{}", Money::from_piasters(0)), "E£0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_piasters(1000);
        let b = Money::from_piasters(500);

        assert_eq!((a + b).piasters(), 1500);
        assert_eq!((a - b).piasters(), 500);
        let result: Money = a * 3;
        assert_eq!(result.piasters(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [2000, 2000, 4500]
            .iter()
            .map(|p| Money::from_piasters(*p))
            .sum();
        assert_eq!(total.piasters(), 8500);
    }

    #[test]
    fn test_with_margin_basic() {
        // E£20.00 at 15% = E£23.00
        let cost = Money::from_piasters(2000);
        let margin = MarginRate::from_bps(1500);
        assert_eq!(cost.with_margin(margin).piasters(), 2300);
    }

    #[test]
    fn test_with_margin_zero_is_identity() {
        let cost = Money::from_piasters(4500);
        assert_eq!(cost.with_margin(MarginRate::zero()), cost);
    }

    #[test]
    fn test_with_margin_negative_reduces_price() {
        // A -10% margin marks the price down
        let cost = Money::from_piasters(1000);
        let margin = MarginRate::from_bps(-1000);
        assert_eq!(cost.with_margin(margin).piasters(), 900);
    }

    #[test]
    fn test_with_margin_rounds_half_up() {
        // E£0.10 at 15% = 11.5 piasters → 12
        let cost = Money::from_piasters(10);
        let margin = MarginRate::from_bps(1500);
        assert_eq!(cost.with_margin(margin).piasters(), 12);
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(Money::parse_or_zero("23.50").piasters(), 2350);
        assert_eq!(Money::parse_or_zero("85").piasters(), 8500);
        assert_eq!(Money::parse_or_zero(" 12.5 ").piasters(), 1250);
        assert_eq!(Money::parse_or_zero("-4.25").piasters(), -425);
        assert_eq!(Money::parse_or_zero("0.999").piasters(), 99);
    }

    #[test]
    fn test_parse_or_zero_coerces_garbage() {
        assert_eq!(Money::parse_or_zero("").piasters(), 0);
        assert_eq!(Money::parse_or_zero("abc").piasters(), 0);
        assert_eq!(Money::parse_or_zero("12,50").piasters(), 0);
        assert_eq!(Money::parse_or_zero(".").piasters(), 0);
        assert_eq!(Money::parse_or_zero("1e5").piasters(), 0);
    }

    #[test]
    fn test_parse_or_zero_overflow_coerces_to_zero() {
        // 18 pound digits parse as i64 but overflow the ×100 conversion
        assert_eq!(Money::parse_or_zero("922337203685477581").piasters(), 0);
        assert_eq!(Money::parse_or_zero("-922337203685477581.99").piasters(), 0);
        // More digits than i64 holds never get that far
        assert_eq!(Money::parse_or_zero("99999999999999999999").piasters(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_piasters(100);
        assert!(positive.is_positive());

        let negative = Money::from_piasters(-100);
        assert!(negative.is_negative());
    }
}
