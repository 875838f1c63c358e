//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  Promotions make this worse: 20% off, half price, every third free.    │
//! │  Each of those multiplies a fractional factor into a running total.     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every total is a whole number of cents. Where a promotion lands      │
//! │    on a half cent, the rounding rule is explicit and tested.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow
//! Non-stocked products accept any positive quantity, so a line total can
//! exceed `i64` cents. Every operation that grows an amount is checked and
//! returns `None` on overflow; callers turn that into
//! [`CoreError::AmountOverflow`](crate::error::CoreError::AmountOverflow).
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let line = price.checked_multiply_quantity(3).unwrap();
//! assert_eq!(line.to_string(), "$32.97");
//! assert!(price.checked_multiply_quantity(i64::MAX).is_none());
//! ```

use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a percentage discount above 100% is not rejected and
///   produces a negative total, so the type has to carry the sign
/// - **Single field tuple struct**: zero-cost wrapper over i64
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► Promotion::apply ──┐
///        │                             ├──► Product::buy ──► Store::order total
///        └──► price × quantity ────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// Meant for literal catalogue prices; `major` must fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(1450).cents(), 145_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies money by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_multiply_quantity(3), Some(Money::from_cents(897)));
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (2000 = 20%)
    ///
    /// The discount amount is rounded half up to the cent before it is
    /// subtracted. Values above 10000 are not rejected and can push the
    /// result negative; `None` when the result leaves the `i64` range.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let line = Money::from_major(400);
    /// assert_eq!(line.apply_percentage_discount(2000), Some(Money::from_major(320)));
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Option<Money> {
        // i128 holds amount × bps for any i64 amount and u32 rate
        let amount = self.0 as i128;
        let discount_amount = (amount * discount_bps as i128 + 5000) / 10000;
        i64::try_from(amount - discount_amount).ok().map(Money)
    }

    /// Returns half of the amount, rounded half up to the cent.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1000).half().cents(), 500);
    /// assert_eq!(Money::from_cents(999).half().cents(), 500);
    /// ```
    #[inline]
    pub const fn half(&self) -> Money {
        Money(self.0.div_euclid(2) + self.0.rem_euclid(2))
    }
}

/// Shows money as `$10.99` / `-$5.50`.
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
        assert_eq!(Money::from_major(10), Money::from_cents(1000));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_major(1450)), "$1450.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(1000);
        assert_eq!(a.checked_add(Money::from_cents(500)), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_checked_multiply_quantity_overflow() {
        let license = Money::from_major(125);
        assert_eq!(
            license.checked_multiply_quantity(1000),
            Some(Money::from_major(125_000))
        );
        assert_eq!(license.checked_multiply_quantity(1_000_000_000_000_000), None);
    }

    #[test]
    fn test_percentage_discount() {
        let subtotal = Money::from_cents(10000);
        assert_eq!(subtotal.apply_percentage_discount(1000), Some(Money::from_cents(9000)));
        assert_eq!(subtotal.apply_percentage_discount(0), Some(subtotal));
        assert_eq!(subtotal.apply_percentage_discount(10000), Some(Money::zero()));
    }

    #[test]
    fn test_percentage_discount_rounds_discount_half_up() {
        // 15% of $0.10 = 1.5 cents of discount → 2 cents
        let amount = Money::from_cents(10);
        assert_eq!(amount.apply_percentage_discount(1500), Some(Money::from_cents(8)));
    }

    #[test]
    fn test_percentage_discount_above_hundred_goes_negative() {
        let amount = Money::from_major(100);
        assert!(amount.apply_percentage_discount(15000).unwrap().is_negative());
    }

    #[test]
    fn test_percentage_discount_out_of_range() {
        let amount = Money::from_cents(i64::MAX);
        assert_eq!(amount.apply_percentage_discount(u32::MAX), None);
    }

    #[test]
    fn test_half() {
        assert_eq!(Money::from_cents(10).half().cents(), 5);
        assert_eq!(Money::from_cents(11).half().cents(), 6);
        assert_eq!(Money::from_cents(1).half().cents(), 1);
        assert_eq!(Money::zero().half().cents(), 0);
        assert_eq!(Money::from_cents(i64::MAX).half().cents(), i64::MAX / 2 + 1);
    }

    #[test]
    fn test_is_negative() {
        assert!(Money::from_cents(-100).is_negative());
        assert!(!Money::zero().is_negative());
    }
}
