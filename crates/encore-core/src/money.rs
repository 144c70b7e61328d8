//! # Money Module
//!
//! Provides the `Money` and `BonusRate` types for handling monetary values
//! and percentage deal terms safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A gig pot split three ways:                                            │
//! │    $2070.00 / 3 = $690.000000...01  → drift compounds across reports   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    207000 cents / 3 = 69000 cents, exactly                             │
//! │    Rounding happens at exactly two boundaries (rate, split) and        │
//! │    nowhere mid-computation                                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use encore_core::money::{BonusRate, Money};
//!
//! let fee = Money::from_cents(230_000); // $2300.00
//!
//! // Percentage bonus: 10% of the gig total
//! let bonus = fee.apply_rate(BonusRate::from_percentage(10.0));
//! assert_eq!(bonus.cents(), 23_000);
//!
//! // Equal split between band members
//! let share = Money::from_cents(207_000).split_between(4);
//! assert_eq!(share.cents(), 51_750); // $517.50
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::MAX_BONUS_BPS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Negative values are meaningful here — a manager who
///   took a larger advance than they earned has negative `myEarnings`, and
///   reports must surface that rather than hide it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// Gig.performance_fee_cents ──┬──► totalReceived ──► bonus / claimed fees
///                             │
/// Gig.technical_fee_cents ────┘         │
///                                       ▼
///                                  pot ──► amount_per_musician
///                                       │
///                                       ▼
///                        my_earnings / amount_owed_to_others
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use encore_core::money::Money;
    ///
    /// let fee = Money::from_cents(200_000); // $2000.00
    /// assert_eq!(fee.cents(), 200_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
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

    /// Clamps negative values to zero.
    ///
    /// Used at the calculator boundary: malformed fee and advance inputs
    /// are clamped to zero before computation rather than rejected, so one
    /// bad record never aborts a whole report.
    #[inline]
    pub const fn clamp_non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Applies a percentage rate with half-up rounding.
    ///
    /// ## Implementation
    /// Integer math in i128 to prevent overflow on large amounts:
    /// `(cents × bps + 5000) / 10000`. The +5000 provides the half-up
    /// rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use encore_core::money::{BonusRate, Money};
    ///
    /// let total = Money::from_cents(230_000); // $2300.00
    /// let bonus = total.apply_rate(BonusRate::from_bps(1000)); // 10%
    /// assert_eq!(bonus.cents(), 23_000); // $230.00
    /// ```
    pub fn apply_rate(&self, rate: BonusRate) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Splits the amount into `n` equal shares, half-up rounded.
    ///
    /// Returns zero when `n <= 0` — a gig with no musicians recorded must
    /// degrade to a defined value, never a division fault.
    ///
    /// ## Example
    /// ```rust
    /// use encore_core::money::Money;
    ///
    /// let pot = Money::from_cents(207_000); // $2070.00
    /// assert_eq!(pot.split_between(4).cents(), 51_750); // $517.50 each
    /// assert_eq!(pot.split_between(0).cents(), 0);
    /// ```
    pub fn split_between(&self, n: i64) -> Money {
        if n <= 0 {
            return Money::zero();
        }
        // Half-up rounded division: (2a + n) / 2n
        let cents = (self.0 as i128 * 2 + n as i128) / (2 * n as i128);
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Bonus Rate
// =============================================================================

/// Percentage deal term represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (a typical manager bonus)
///
/// Deal terms arrive as percentage points (0-100, fractional allowed) and
/// are converted exactly once, clamped into range, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BonusRate(u32);

impl BonusRate {
    /// Creates a rate from basis points, clamped to [0, 10000].
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        if bps > MAX_BONUS_BPS {
            BonusRate(MAX_BONUS_BPS)
        } else {
            BonusRate(bps)
        }
    }

    /// Creates a rate from percentage points, clamped to [0, 100].
    ///
    /// ## Example
    /// ```rust
    /// use encore_core::money::BonusRate;
    ///
    /// assert_eq!(BonusRate::from_percentage(10.0).bps(), 1000);
    /// assert_eq!(BonusRate::from_percentage(12.5).bps(), 1250);
    /// assert_eq!(BonusRate::from_percentage(150.0).bps(), 10000); // clamped
    /// assert_eq!(BonusRate::from_percentage(-3.0).bps(), 0);      // clamped
    /// ```
    pub fn from_percentage(pct: f64) -> Self {
        let pct = pct.clamp(0.0, 100.0);
        BonusRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as percentage points (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        BonusRate(0)
    }
}

impl Default for BonusRate {
    fn default() -> Self {
        BonusRate::zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for debugging and log output. Export rendering formats amounts
/// on its own side to handle localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor_part())
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

/// Multiplication by i64 (e.g. share × musician count).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, n: i64) -> Self {
        Money(self.0 * n)
    }
}

/// Summation over per-gig amounts (report totals).
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
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(2000, 0).cents(), 200_000);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(230_000)), "$2300.00");
        assert_eq!(format!("{}", Money::from_cents(51_750)), "$517.50");
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

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_apply_rate_basic() {
        // $2300.00 at 10% = $230.00
        let total = Money::from_cents(230_000);
        assert_eq!(total.apply_rate(BonusRate::from_bps(1000)).cents(), 23_000);
    }

    #[test]
    fn test_apply_rate_with_rounding() {
        // $10.00 at 8.25% = $0.825 → $0.83 half-up
        let amount = Money::from_cents(1000);
        assert_eq!(amount.apply_rate(BonusRate::from_bps(825)).cents(), 83);
    }

    #[test]
    fn test_split_between() {
        // Exact split
        assert_eq!(Money::from_cents(207_000).split_between(4).cents(), 51_750);
        // Rounded split: $10.00 / 3 = $3.33
        assert_eq!(Money::from_cents(1000).split_between(3).cents(), 333);
        // Half-up: $10.01 / 2 = $5.005 → $5.01
        assert_eq!(Money::from_cents(1001).split_between(2).cents(), 501);
    }

    #[test]
    fn test_split_between_degenerate_counts() {
        let pot = Money::from_cents(1000);
        assert_eq!(pot.split_between(0).cents(), 0);
        assert_eq!(pot.split_between(-3).cents(), 0);
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(Money::from_cents(-500).clamp_non_negative().cents(), 0);
        assert_eq!(Money::from_cents(500).clamp_non_negative().cents(), 500);
    }

    #[test]
    fn test_bonus_rate_clamping() {
        assert_eq!(BonusRate::from_percentage(10.0).bps(), 1000);
        assert_eq!(BonusRate::from_percentage(100.0).bps(), 10_000);
        assert_eq!(BonusRate::from_percentage(250.0).bps(), 10_000);
        assert_eq!(BonusRate::from_percentage(-1.0).bps(), 0);
        assert_eq!(BonusRate::from_bps(20_000).bps(), 10_000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }
}
