//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  Profit margins computed in floats drift one cent at a time.        │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    Every price, cost basis, and profit figure is an i64 in the      │
//! │    smallest currency unit. Rounding happens exactly once, in the    │
//! │    basis-point helpers below, and is explicit.                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazar_core::money::Money;
//!
//! let cost = Money::from_cents(4000);        // $40.00 purchase price
//! let selling = cost.apply_markup_bps(5000); // +50% markup = $60.00
//! assert_eq!(selling.cents(), 6000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: profit on a discounted line can be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// Every monetary value in the system flows through this type:
/// purchase price → calculated price tiers → cart line snapshot →
/// order profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// There is deliberately no `from_float` constructor. The database
    /// of record for prices is cents, end to end; only the UI converts
    /// to a decimal for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (e.g. dollars).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use bazar_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Returns the smaller of two money values.
    ///
    /// Used to clamp the adjusted purchase price so the cost basis can
    /// never exceed the selling price.
    #[inline]
    pub fn min_of(self, other: Money) -> Money {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Applies a percentage markup given in basis points.
    ///
    /// ## Basis Points
    /// 1 basis point = 0.01% = 1/10000, so 5000 bps = 50%.
    ///
    /// ## Implementation
    /// Integer math with explicit rounding: `(amount * bps + 5000) / 10000`
    /// is the markup amount; i128 intermediates prevent overflow on large
    /// amounts.
    ///
    /// ## Example
    /// ```rust
    /// use bazar_core::money::Money;
    ///
    /// let cost = Money::from_cents(4000);           // $40.00
    /// let selling = cost.apply_markup_bps(5000);    // +50%
    /// assert_eq!(selling.cents(), 6000);            // $60.00
    /// ```
    pub fn apply_markup_bps(&self, markup_bps: u32) -> Money {
        let markup = (self.0 as i128 * markup_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 + markup as i64)
    }

    /// Applies a percentage discount (in basis points) and returns the
    /// discounted amount.
    ///
    /// ## Example
    /// ```rust
    /// use bazar_core::money::Money;
    ///
    /// let price = Money::from_cents(10000);                  // $100.00
    /// assert_eq!(price.apply_discount_bps(1000).cents(), 9000); // 10% off
    /// ```
    pub fn apply_discount_bps(&self, discount_bps: u32) -> Money {
        let discount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display for debugging and log lines. UI display goes through the
/// presentation layer so localization is handled there.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
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
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
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
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_markup_basic() {
        // $40.00 at +50% = $60.00
        let cost = Money::from_cents(4000);
        assert_eq!(cost.apply_markup_bps(5000).cents(), 6000);
    }

    #[test]
    fn test_markup_with_rounding() {
        // $10.99 at +33.33% = $14.6529... → $14.65
        let cost = Money::from_cents(1099);
        assert_eq!(cost.apply_markup_bps(3333).cents(), 1465);
    }

    #[test]
    fn test_discount() {
        let price = Money::from_cents(10000); // $100.00
        assert_eq!(price.apply_discount_bps(1000).cents(), 9000); // 10%
        assert_eq!(price.apply_discount_bps(0).cents(), 10000);
    }

    #[test]
    fn test_min_of_clamps() {
        let a = Money::from_cents(700);
        let b = Money::from_cents(500);
        assert_eq!(a.min_of(b).cents(), 500);
        assert_eq!(b.min_of(a).cents(), 500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    }

    #[test]
    fn test_negative_profit_is_representable() {
        // Selling below cost: (price - cost) × qty goes negative.
        let price = Money::from_cents(500);
        let cost = Money::from_cents(800);
        let margin = (price - cost).multiply_quantity(2);
        assert!(margin.is_negative());
        assert_eq!(margin.cents(), -600);
    }
}
