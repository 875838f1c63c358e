//! # storefront-core: Pure Business Logic for Storefront
//!
//! Products with stock levels, promotional pricing rules, and a store that
//! turns a shopping list into stock debits and an order total.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  storefront-cli (menu loop, initial stock)                              │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   store   │─►│  product  │─►│ promotion │─►│   money   │  │   │
//! │  │   │   order   │  │    buy    │  │   apply   │  │   cents   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • SINGLE-THREADED • IN-MEMORY                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic
//! - [`promotion`] - Pricing strategies
//! - [`product`] - Product, stock policies, shared handles
//! - [`store`] - Product collection and order workflow
//! - [`validation`] - Input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Money, OrderLine, Product, SharedProduct, Store};
//!
//! let widget = SharedProduct::new(Product::new("Widget", Money::from_major(10), 5).unwrap());
//! let store = Store::new(vec![widget.clone()]);
//!
//! let total = store.order(&[OrderLine::new(widget.clone(), 3)]).unwrap();
//! assert_eq!(total, Money::from_major(30));
//! assert_eq!(widget.quantity(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{Product, SharedProduct, StockPolicy};
pub use promotion::Promotion;
pub use store::{OrderLine, Store};
