//! # Product
//!
//! A stocked item with a unit price, an active flag and an optional promotion.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  buy(qty)                                                               │
//! │     │                                                                   │
//! │     ├── !active ─────────────────────────► InactiveProduct              │
//! │     ├── qty <= 0 ────────────────────────► InvalidArgument              │
//! │     ├── Limited && qty > maximum ────────► OrderExceedsLimit            │
//! │     ├── (Tracked|Limited) && qty > stock ► InsufficientStock            │
//! │     │                                                                   │
//! │     ├── price = promotion.apply(..) or price × qty                     │
//! │     ├── stock -= qty            (not for NonStocked)                    │
//! │     └── stock == 0 → deactivate                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed purchase leaves the product untouched.
//!
//! ## Shared Ownership
//! The same product is held by the store and by every shopping-list line
//! that names it. [`SharedProduct`] is an `Rc<RefCell<Product>>` handle:
//! clones alias one product, so two lines buying the same product see each
//! other's stock changes in order.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::Promotion;
use crate::validation::{
    validate_order_maximum, validate_price, validate_product_name, validate_purchase_quantity,
    validate_stock_quantity,
};

// =============================================================================
// Stock Policy
// =============================================================================

/// Controls the availability step of [`Product::buy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockPolicy {
    /// Purchases are limited by the stock on hand.
    #[default]
    Tracked,

    /// No stock constraint (digital licenses). Quantity is always 0 and the
    /// product never deactivates on its own.
    NonStocked,

    /// Stock is tracked and a single purchase is capped at `maximum` units.
    Limited { maximum: i64 },
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone)]
pub struct Product {
    name: String,
    price: Money,
    quantity: i64,
    active: bool,
    stock_policy: StockPolicy,
    promotion: Option<Rc<Promotion>>,
}

impl Product {
    /// Creates a stock-tracked product.
    ///
    /// The product starts active iff `quantity > 0`.
    ///
    /// ## Errors
    /// `InvalidArgument` for an empty name, negative price or negative quantity.
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> CoreResult<Self> {
        Self::build(name.into(), price, quantity, StockPolicy::Tracked)
    }

    /// Creates a product with no stock constraint. Always starts active.
    pub fn non_stocked(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Self::build(name.into(), price, 0, StockPolicy::NonStocked)
    }

    /// Creates a stock-tracked product capped at `maximum` units per purchase.
    pub fn limited(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        maximum: i64,
    ) -> CoreResult<Self> {
        validate_order_maximum(maximum)?;
        Self::build(name.into(), price, quantity, StockPolicy::Limited { maximum })
    }

    fn build(name: String, price: Money, quantity: i64, stock_policy: StockPolicy) -> CoreResult<Self> {
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock_quantity(quantity)?;

        let active = match stock_policy {
            StockPolicy::NonStocked => true,
            StockPolicy::Tracked | StockPolicy::Limited { .. } => quantity > 0,
        };

        Ok(Product {
            name,
            price,
            quantity,
            active,
            stock_policy,
            promotion: None,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Current stock level.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Alias of [`Product::quantity`].
    #[inline]
    pub fn get_quantity(&self) -> i64 {
        self.quantity
    }

    #[inline]
    pub fn stock_policy(&self) -> StockPolicy {
        self.stock_policy
    }

    /// Overwrites the stock level.
    ///
    /// Zero deactivates the product. A positive value does not reactivate it;
    /// call [`Product::activate`] for that. Non-stocked products keep a
    /// quantity of 0 and ignore the call.
    ///
    /// ## Errors
    /// `InvalidArgument` for a negative quantity, same rule as construction.
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validate_stock_quantity(quantity)?;

        if self.stock_policy == StockPolicy::NonStocked {
            debug!(product = %self.name, quantity, "Ignoring quantity update on non-stocked product");
            return Ok(());
        }

        self.quantity = quantity;
        if self.quantity == 0 {
            self.deactivate();
        }
        Ok(())
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the product active, independent of stock.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Marks the product inactive, independent of stock.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_deref()
    }

    /// Attaches a promotion, replacing any previous one.
    pub fn set_promotion(&mut self, promotion: Rc<Promotion>) {
        self.promotion = Some(promotion);
    }

    pub fn remove_promotion(&mut self) {
        self.promotion = None;
    }

    /// Renders the product as one line, e.g.
    /// `MacBook Air M2, Price: $1450.00, Quantity: 100, Promotion: No promotion`.
    pub fn show(&self) -> String {
        self.to_string()
    }

    /// Buys `quantity` units and returns the total price.
    ///
    /// ## Errors
    /// Checked in this order:
    /// - `InactiveProduct` when the product is not active
    /// - `InvalidArgument` when `quantity <= 0`
    /// - `OrderExceedsLimit` when a limited product's maximum is exceeded
    /// - `InsufficientStock` when `quantity` exceeds stock on hand
    /// - `AmountOverflow` when the total does not fit in `i64` cents
    ///
    /// Stock is only touched once every check, pricing included, has passed.
    pub fn buy(&mut self, quantity: i64) -> CoreResult<Money> {
        if !self.active {
            return Err(CoreError::InactiveProduct {
                name: self.name.clone(),
            });
        }

        validate_purchase_quantity(quantity)?;

        match self.stock_policy {
            StockPolicy::NonStocked => {}
            StockPolicy::Limited { maximum } if quantity > maximum => {
                return Err(CoreError::OrderExceedsLimit {
                    name: self.name.clone(),
                    maximum,
                    requested: quantity,
                });
            }
            StockPolicy::Tracked | StockPolicy::Limited { .. } => {
                if quantity > self.quantity {
                    return Err(CoreError::InsufficientStock {
                        name: self.name.clone(),
                        available: self.quantity,
                        requested: quantity,
                    });
                }
            }
        }

        let total = match &self.promotion {
            Some(promotion) => promotion.apply_promotion(self, quantity),
            None => self.price.checked_multiply_quantity(quantity),
        }
        .ok_or_else(|| CoreError::AmountOverflow {
            name: self.name.clone(),
            quantity,
        })?;

        if self.stock_policy != StockPolicy::NonStocked {
            self.quantity -= quantity;
            if self.quantity == 0 {
                self.deactivate();
            }
        }

        debug!(
            product = %self.name,
            quantity,
            total = %total,
            remaining = self.quantity,
            "Product purchased"
        );

        Ok(total)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Price: {}, ", self.name, self.price)?;
        match self.stock_policy {
            StockPolicy::NonStocked => write!(f, "Quantity: Unlimited")?,
            StockPolicy::Tracked | StockPolicy::Limited { .. } => {
                write!(f, "Quantity: {}", self.quantity)?
            }
        }
        if let StockPolicy::Limited { maximum } = self.stock_policy {
            write!(f, ", Maximum: {} per order", maximum)?;
        }
        match &self.promotion {
            Some(promotion) => write!(f, ", Promotion: {}", promotion.name()),
            None => write!(f, ", Promotion: No promotion"),
        }
    }
}

// =============================================================================
// Shared Product Handle
// =============================================================================

/// Reference-counted handle to a [`Product`].
///
/// Cloning the handle does not copy the product. The store and any number of
/// order lines can hold the same product, and a purchase through one handle
/// is visible through all of them.
///
/// The crate is single-threaded, so `Rc<RefCell<_>>` is enough. Sharing
/// products across threads would need `Arc<Mutex<Product>>` instead.
#[derive(Debug, Clone)]
pub struct SharedProduct {
    inner: Rc<RefCell<Product>>,
}

impl SharedProduct {
    pub fn new(product: Product) -> Self {
        SharedProduct {
            inner: Rc::new(RefCell::new(product)),
        }
    }

    /// Executes a function with read access to the product.
    ///
    /// ## Usage
    /// ```rust
    /// use storefront_core::{Money, Product, SharedProduct};
    ///
    /// let widget = SharedProduct::new(Product::new("Widget", Money::from_major(10), 5).unwrap());
    /// let policy = widget.with_product(|p| p.stock_policy());
    /// # let _ = policy;
    /// ```
    pub fn with_product<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Product) -> R,
    {
        f(&self.inner.borrow())
    }

    /// Executes a function with write access to the product.
    pub fn with_product_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Product) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }

    /// True when both handles point at the same product.
    pub fn ptr_eq(&self, other: &SharedProduct) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn name(&self) -> String {
        self.with_product(|p| p.name().to_string())
    }

    pub fn price(&self) -> Money {
        self.with_product(Product::price)
    }

    pub fn quantity(&self) -> i64 {
        self.with_product(Product::quantity)
    }

    pub fn stock_policy(&self) -> StockPolicy {
        self.with_product(Product::stock_policy)
    }

    pub fn is_active(&self) -> bool {
        self.with_product(Product::is_active)
    }

    pub fn show(&self) -> String {
        self.with_product(Product::show)
    }

    pub fn set_quantity(&self, quantity: i64) -> CoreResult<()> {
        self.with_product_mut(|p| p.set_quantity(quantity))
    }

    pub fn activate(&self) {
        self.with_product_mut(Product::activate)
    }

    pub fn deactivate(&self) {
        self.with_product_mut(Product::deactivate)
    }

    pub fn set_promotion(&self, promotion: Rc<Promotion>) {
        self.with_product_mut(|p| p.set_promotion(promotion))
    }

    pub fn remove_promotion(&self) {
        self.with_product_mut(Product::remove_promotion)
    }

    pub fn buy(&self, quantity: i64) -> CoreResult<Money> {
        self.with_product_mut(|p| p.buy(quantity))
    }
}

impl From<Product> for SharedProduct {
    fn from(product: Product) -> Self {
        SharedProduct::new(product)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
