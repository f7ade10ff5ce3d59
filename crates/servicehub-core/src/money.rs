//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    Rs. 449 is stored as 44900 paise (i64)                              │
//! │    Sums, quantities and discounts stay exact                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use servicehub_core::money::Money;
//!
//! // Create from paise (preferred) or whole rupees
//! let price = Money::from_cents(44900);
//! assert_eq!(price, Money::from_rupees(449));
//!
//! // Arithmetic operations
//! let line: Money = price * 2;
//! assert_eq!(line.cents(), 89800);
//!
//! // NEVER from floats: no such constructor exists
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **"cents" naming**: The smallest unit is called cents throughout the
///   codebase regardless of currency; for INR that unit is the paisa
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use servicehub_core::money::Money;
    ///
    /// let bid = Money::from_rupees(450);
    /// assert_eq!(bid.cents(), 45000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use servicehub_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(299);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.rupees(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns the rounded percentage saved when this (original) price is
    /// discounted down to `current`.
    ///
    /// ## Behavior
    /// Round-half-up integer math, matching the "X% OFF" badges shown on
    /// discounted service cards. Returns 0 when the original price is not
    /// positive or no money is saved.
    ///
    /// ## Example
    /// ```rust
    /// use servicehub_core::money::Money;
    ///
    /// let original = Money::from_rupees(3499);
    /// let current = Money::from_rupees(2499);
    /// assert_eq!(original.percent_off(current), 29);
    /// ```
    pub fn percent_off(&self, current: Money) -> u32 {
        if self.0 <= 0 || current.0 >= self.0 {
            return 0;
        }
        let saved = self.0 - current.0;
        // (saved / original) * 100, rounded half up, in i128 to avoid overflow
        let pct = (saved as i128 * 200 + self.0 as i128) / (self.0 as i128 * 2);
        pct as u32
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        if self.paise_part() == 0 {
            write!(f, "{}Rs. {}", sign, self.rupees().abs())
        } else {
            write!(f, "{}Rs. {}.{:02}", sign, self.rupees().abs(), self.paise_part())
        }
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

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(44900);
        assert_eq!(money.cents(), 44900);
        assert_eq!(money.rupees(), 449);
        assert_eq!(money.paise_part(), 0);
    }

    #[test]
    fn test_from_rupees() {
        assert_eq!(Money::from_rupees(450).cents(), 45000);
        assert_eq!(Money::from_rupees(0).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupees(449)), "Rs. 449");
        assert_eq!(format!("{}", Money::from_cents(45050)), "Rs. 450.50");
        assert_eq!(format!("{}", Money::from_cents(-55000)), "-Rs. 550");
        assert_eq!(format!("{}", Money::zero()), "Rs. 0");
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
    fn test_multiply_quantity() {
        let unit_price = Money::from_rupees(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.rupees(), 897);
    }

    #[test]
    fn test_percent_off_matches_badge_math() {
        // Rs. 3499 → Rs. 2499 saves 1000/3499 = 28.58% → 29% OFF
        let original = Money::from_rupees(3499);
        let current = Money::from_rupees(2499);
        assert_eq!(original.percent_off(current), 29);

        // Rs. 799 → Rs. 599 saves 200/799 = 25.03% → 25% OFF
        assert_eq!(Money::from_rupees(799).percent_off(Money::from_rupees(599)), 25);
    }

    #[test]
    fn test_percent_off_degenerate_cases() {
        // No discount
        let price = Money::from_rupees(500);
        assert_eq!(price.percent_off(price), 0);

        // "Original" below current
        assert_eq!(Money::from_rupees(100).percent_off(Money::from_rupees(200)), 0);

        // Zero original price
        assert_eq!(Money::zero().percent_off(Money::from_rupees(10)), 0);
    }
}
