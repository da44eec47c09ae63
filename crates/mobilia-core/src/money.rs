//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    A $499.90 wardrobe is 49990 cents, and every surcharge is an     │
//! │    exact integer number of cents.                                   │
//! │                                                                     │
//! │  Pricing multipliers (comfort factor, size factor) are the single   │
//! │  place floating point enters: the product is rounded to the         │
//! │  nearest cent immediately, so results are always exact to two       │
//! │  decimal places.                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mobilia_core::Money;
//!
//! // Create from cents (preferred) or whole currency units
//! let price = Money::from_cents(10999); // $109.99
//! let base = Money::from_units(500);    // $500.00
//!
//! // Arithmetic operations
//! let total = price + base;             // $609.99
//! let doubled = base * 2;               // $1000.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: keeps subtraction total (discount math never wraps)
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use mobilia_core::Money;
    ///
    /// let price = Money::from_cents(10999); // Represents $109.99
    /// assert_eq!(price.cents(), 10999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// Catalog base prices and surcharges are quoted in whole units, so
    /// this is the constructor most pricing rules use.
    ///
    /// ## Example
    /// ```rust
    /// use mobilia_core::Money;
    ///
    /// let surcharge = Money::from_units(300);
    /// assert_eq!(surcharge.cents(), 30000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn units_part(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99, absolute value).
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

    /// Multiplies by a pricing factor and rounds to the nearest cent.
    ///
    /// This is how category multipliers (comfort factor, size factor) are
    /// applied to a base price. Rounding happens here and nowhere else, so
    /// every computed price is exact to two decimal places.
    ///
    /// ## Example
    /// ```rust
    /// use mobilia_core::Money;
    ///
    /// let base = Money::from_units(200);
    /// let priced = base.apply_factor(1.48);
    /// assert_eq!(priced, Money::from_units(296));
    /// ```
    pub fn apply_factor(&self, factor: f64) -> Money {
        Money((self.0 as f64 * factor).round() as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (500 = 5%)
    ///
    /// ## Example
    /// ```rust
    /// use mobilia_core::Money;
    ///
    /// let subtotal = Money::from_units(100);
    /// let discounted = subtotal.apply_percentage_discount(500); // 5% off
    /// assert_eq!(discounted, Money::from_units(95));
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        // Calculate discount amount with half-up rounding, then subtract
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for descriptions and debugging. A frontend handles localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.units_part().abs(),
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

/// Multiplication by a count (doors, drawers, quantity surcharges).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i32) -> Self {
        Money(self.0 * count as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }
}

/// Summation over item collections (dining set totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
        let money = Money::from_cents(10999);
        assert_eq!(money.cents(), 10999);
        assert_eq!(money.units_part(), 109);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_units() {
        assert_eq!(Money::from_units(500).cents(), 50000);
        assert_eq!(Money::from_units(-5).cents(), -500);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(10999)), "$109.99");
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
        assert_eq!((a * 3i64).cents(), 3000);
        assert_eq!((a * 4u32).cents(), 4000);
    }

    #[test]
    fn test_apply_factor_rounds_to_cent() {
        // $100.00 × 1.1 = $110.00 despite 1.1 being inexact in binary
        let base = Money::from_units(100);
        assert_eq!(base.apply_factor(1.1), Money::from_cents(11000));

        // $33.33 × 1.5 = $49.995 → rounds to $50.00
        let odd = Money::from_cents(3333);
        assert_eq!(odd.apply_factor(1.5), Money::from_cents(5000));
    }

    #[test]
    fn test_apply_factor_identity() {
        let base = Money::from_cents(123456);
        assert_eq!(base.apply_factor(1.0), base);
    }

    #[test]
    fn test_percentage_discount() {
        let subtotal = Money::from_units(100);
        let discounted = subtotal.apply_percentage_discount(500); // 5%
        assert_eq!(discounted, Money::from_units(95));
    }

    #[test]
    fn test_percentage_discount_rounds_half_up() {
        // $844.00 × 5% = $42.20 discount → $801.80
        let subtotal = Money::from_cents(84400);
        assert_eq!(
            subtotal.apply_percentage_discount(500),
            Money::from_cents(80180)
        );
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_units(1), Money::from_units(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_units(3));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(-100).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
