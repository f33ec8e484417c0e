//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  bistro-core errors (this file)                                 │
//! │  └── CoreError     - Domain rule violations                     │
//! │                                                                 │
//! │  bistro-db errors (separate crate)                              │
//! │  └── DbError       - Database operation failures                │
//! │                                                                 │
//! │  bistro-session errors (separate crate)                         │
//! │  └── SessionError  - Illegal state-machine transitions          │
//! │                                                                 │
//! │  Flow: CoreError → SessionError → caller (GUI shell)            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item id, quantity, etc.)
//! 3. Errors are enum variants, never String
//!
//! Note that "item not found" is deliberately NOT an error here: catalog
//! lookups return `Option` because absence is a normal outcome the caller
//! must branch on.

use thiserror::Error;

/// Core business logic errors.
///
/// These represent business rule violations. They are surfaced immediately
/// with state unchanged, so the caller can correct the input and retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Quantity must be a positive integer.
    ///
    /// ## When This Occurs
    /// - Adding a line with quantity 0 or negative
    #[error("Quantity must be positive, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// Menu items must have a non-empty name.
    #[error("Menu item name must not be empty")]
    EmptyName,

    /// Menu item prices are non-negative cent amounts.
    #[error("Menu item price must not be negative, got {cents} cents")]
    NegativePrice { cents: i64 },

    /// The order is no longer open and cannot be modified.
    ///
    /// ## When This Occurs
    /// - Adding or removing lines on a committed or cancelled order
    #[error("Order {order_id} is {status}, lines can only change while open")]
    OrderNotOpen { order_id: i64, status: String },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidQuantity { requested: -2 };
        assert_eq!(err.to_string(), "Quantity must be positive, got -2");

        let err = CoreError::OrderNotOpen {
            order_id: 7,
            status: "committed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Order 7 is committed, lines can only change while open"
        );
    }
}
