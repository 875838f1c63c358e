//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Purchase and stock rule violations             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-cli errors (separate crate)                                │
//! │  └── CliError         - I/O and configuration failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → printed to the user    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Propagation
//! `Product::buy` returns these errors to its caller unchanged.
//! `Store::order` forwards the first one it sees without wrapping it.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every failure here is terminal for the operation in progress. There is no
/// retry anywhere in the core; callers decide whether to resubmit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Bad input: empty name, negative price or quantity, non-positive
    /// purchase quantity.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Purchase attempted on a deactivated product.
    #[error("Product {name} is not active")]
    InactiveProduct { name: String },

    /// Purchase quantity exceeds the available stock.
    ///
    /// ## User Workflow
    /// ```text
    /// order([(widget, 3)])   stock = 2
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Widget", available: 2, requested: 3 }
    ///      │
    ///      ▼
    /// stock stays at 2
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Purchase quantity exceeds a limited product's per-order maximum.
    #[error("Order for {name} exceeds limit: maximum {maximum} per order, requested {requested}")]
    OrderExceedsLimit {
        name: String,
        maximum: i64,
        requested: i64,
    },

    /// The priced total does not fit in `i64` cents.
    ///
    /// Raised before any stock changes for the line that overflowed.
    #[error("Order total for {quantity} x {name} is too large")]
    AmountOverflow { name: String, quantity: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Surfaced to callers as [`CoreError::InvalidArgument`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustNotBeNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Widget".to_string(),
            available: 2,
            requested: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Widget: available 2, requested 3"
        );

        let err = CoreError::OrderExceedsLimit {
            name: "Shipping".to_string(),
            maximum: 1,
            requested: 2,
        };
        assert_eq!(
            err.to_string(),
            "Order for Shipping exceeds limit: maximum 1 per order, requested 2"
        );

        let err = CoreError::AmountOverflow {
            name: "Windows License".to_string(),
            quantity: 100_000_000_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "Order total for 100000000000000000 x Windows License is too large"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price cannot be negative");
    }

    #[test]
    fn test_validation_converts_to_invalid_argument() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidArgument(_)));
        assert_eq!(core_err.to_string(), "Invalid argument: quantity must be positive");
    }
}
