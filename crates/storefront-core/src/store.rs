//! # Store
//!
//! An ordered collection of products and the order workflow over it.
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  order([(macbook, 2), (earbuds, 600), (pixel, 1)])                      │
//! │                                                                         │
//! │  line 0: macbook.buy(2)    ── Ok($2900) ── committed                    │
//! │  line 1: earbuds.buy(600)  ── Err(InsufficientStock) ── returned        │
//! │  line 2: never attempted                                                │
//! │                                                                         │
//! │  Line 0 stays committed. The order is NOT all-or-nothing.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stopping without rollback is the chosen semantics: each line is an
//! independent purchase, and the caller gets the first error to act on.

use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::SharedProduct;

// =============================================================================
// Order Line
// =============================================================================

/// One `(product, quantity)` request in a shopping list.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product: SharedProduct,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product: SharedProduct, quantity: i64) -> Self {
        OrderLine { product, quantity }
    }
}

impl From<(SharedProduct, i64)> for OrderLine {
    fn from((product, quantity): (SharedProduct, i64)) -> Self {
        OrderLine { product, quantity }
    }
}

// =============================================================================
// Store
// =============================================================================

/// A store holding products in insertion order.
///
/// ## Invariants
/// - Order of `products` is insertion order
/// - Names are not unique; name lookups return the first match
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<SharedProduct>,
}

impl Store {
    pub fn new(products: Vec<SharedProduct>) -> Self {
        Store { products }
    }

    /// Every held product, active or not.
    pub fn products(&self) -> &[SharedProduct] {
        &self.products
    }

    pub fn add_product(&mut self, product: SharedProduct) {
        self.products.push(product);
    }

    /// Removes the first entry that is the same product as `product`.
    ///
    /// Identity is by reference, not by name. Absent products are ignored.
    pub fn remove_product(&mut self, product: &SharedProduct) {
        if let Some(index) = self.products.iter().position(|p| p.ptr_eq(product)) {
            self.products.remove(index);
        }
    }

    /// Sum of all product quantities, active or not.
    pub fn get_total_quantity(&self) -> i64 {
        self.products.iter().map(SharedProduct::quantity).sum()
    }

    /// Active products only, in store order.
    pub fn get_all_products(&self) -> Vec<SharedProduct> {
        self.products
            .iter()
            .filter(|p| p.is_active())
            .cloned()
            .collect()
    }

    /// First product whose name matches exactly (case-sensitive).
    pub fn find_product(&self, name: &str) -> Option<SharedProduct> {
        self.products
            .iter()
            .find(|p| p.with_product(|product| product.name() == name))
            .cloned()
    }

    /// Buys every line in order and returns the summed total.
    ///
    /// ## Errors
    /// The first error from `Product::buy`, unchanged. Lines before it stay
    /// bought, lines after it are not attempted. `AmountOverflow` when the
    /// running total leaves the `i64` range; the line that pushed it over
    /// has already been bought.
    pub fn order(&self, shopping_list: &[OrderLine]) -> CoreResult<Money> {
        let mut total = Money::zero();

        for (index, line) in shopping_list.iter().enumerate() {
            debug!(
                line = index,
                product = %line.product.name(),
                quantity = line.quantity,
                "Processing order line"
            );

            let priced = line.product.buy(line.quantity).and_then(|line_total| {
                total
                    .checked_add(line_total)
                    .ok_or_else(|| CoreError::AmountOverflow {
                        name: line.product.name(),
                        quantity: line.quantity,
                    })
            });

            match priced {
                Ok(running_total) => total = running_total,
                Err(err) => {
                    warn!(
                        line = index,
                        error = %err,
                        "Order aborted"
                    );
                    return Err(err);
                }
            }
        }

        info!(lines = shopping_list.len(), total = %total, "Order completed");
        Ok(total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
