//! # Promotions
//!
//! Pricing strategies that replace `unit price × quantity` for a purchase.
//!
//! ## Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PercentageDiscount   line × (1 - pct/100)                              │
//! │                       4 × $100 at 20%        = $320                     │
//! │                                                                         │
//! │  SecondItemHalfPrice  every 2nd unit at half price, odd unit full       │
//! │                       5 × $10 → 3 full + 2 half = $40                   │
//! │                                                                         │
//! │  Buy2Get1Free         every 3rd unit free                               │
//! │                       9 × $30 → 6 paid       = $180                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The set is closed, so promotions are an enum dispatched by `match`.
//! A promotion holds configuration only and never mutates the product it
//! prices. Products hold it behind an `Rc`, so one promotion can be attached
//! to several products.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::product::Product;

/// A pricing rule attached to at most one slot on a product.
///
/// Serialized with an internal `type` tag:
/// `{"type": "percentage_discount", "name": "30% off!", "discount_bps": 3000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Promotion {
    /// Flat percentage off the whole line.
    ///
    /// `discount_bps` is not bounds-checked: 0-10000 is expected, larger
    /// values produce a negative total.
    PercentageDiscount { name: String, discount_bps: u32 },

    /// Units are paired; in each pair one is full price and one is half.
    SecondItemHalfPrice { name: String },

    /// Every complete group of three units costs two.
    #[serde(rename = "buy_two_get_one_free")]
    Buy2Get1Free { name: String },
}

impl Promotion {
    /// Percentage discount from a whole percent (`20` = 20% off).
    ///
    /// Percents too large for basis points saturate at `u32::MAX`.
    pub fn percentage(name: impl Into<String>, percent: u32) -> Self {
        Promotion::PercentageDiscount {
            name: name.into(),
            discount_bps: percent.saturating_mul(100),
        }
    }

    /// Percentage discount in basis points (`1250` = 12.5% off).
    pub fn percentage_bps(name: impl Into<String>, discount_bps: u32) -> Self {
        Promotion::PercentageDiscount {
            name: name.into(),
            discount_bps,
        }
    }

    pub fn second_item_half_price(name: impl Into<String>) -> Self {
        Promotion::SecondItemHalfPrice { name: name.into() }
    }

    pub fn buy_two_get_one_free(name: impl Into<String>) -> Self {
        Promotion::Buy2Get1Free { name: name.into() }
    }

    /// Display label of the promotion.
    pub fn name(&self) -> &str {
        match self {
            Promotion::PercentageDiscount { name, .. }
            | Promotion::SecondItemHalfPrice { name }
            | Promotion::Buy2Get1Free { name } => name,
        }
    }

    /// Computes the discounted total for `quantity` units at `unit_price`.
    ///
    /// Pure: no product state is read or written. `quantity` is expected to
    /// be positive; `Product::buy` validates it before calling this.
    /// Returns `None` when the total does not fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::promotion::Promotion;
    ///
    /// let promo = Promotion::buy_two_get_one_free("Third One Free!");
    /// assert_eq!(promo.apply(Money::from_major(30), 9), Some(Money::from_major(180)));
    /// assert_eq!(promo.apply(Money::from_major(30), i64::MAX), None);
    /// ```
    pub fn apply(&self, unit_price: Money, quantity: i64) -> Option<Money> {
        match self {
            Promotion::PercentageDiscount { discount_bps, .. } => unit_price
                .checked_multiply_quantity(quantity)?
                .apply_percentage_discount(*discount_bps),
            Promotion::SecondItemHalfPrice { .. } => {
                let half_price_units = quantity / 2;
                let full_price_units = quantity - half_price_units;
                let full = unit_price.checked_multiply_quantity(full_price_units)?;
                let half = unit_price.checked_multiply_quantity(half_price_units)?.half();
                full.checked_add(half)
            }
            Promotion::Buy2Get1Free { .. } => {
                let free_units = quantity / 3;
                unit_price.checked_multiply_quantity(quantity - free_units)
            }
        }
    }

    /// Computes the discounted total for buying `quantity` units of `product`.
    pub fn apply_promotion(&self, product: &Product, quantity: i64) -> Option<Money> {
        self.apply(product.price(), quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
