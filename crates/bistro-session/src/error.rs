//! # Session Error Types
//!
//! Illegal transitions and caller mistakes surfaced by the order session.
//!
//! ## Design Principles
//! Validation errors (`SessionBusy`, `NoActiveOrder`, `InvalidQuantity`,
//! `EmptyOrder`) are caller mistakes: surfaced immediately, session state
//! unchanged. `Persistence` during checkout leaves the session Active so
//! the caller can retry without data loss. Nothing is swallowed into logs
//! only; every operation returns an explicit outcome.

use thiserror::Error;

use bistro_core::CoreError;
use bistro_db::DbError;

/// Order session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A new order was requested while one is already in progress.
    ///
    /// The session never silently discards an open order; callers must
    /// checkout or cancel explicitly first.
    #[error("An order is already in progress; checkout or cancel it first")]
    SessionBusy,

    /// The operation requires an open order and the session is idle.
    #[error("No active order; start a new order first")]
    NoActiveOrder,

    /// Quantity must be a positive integer.
    #[error("Quantity must be positive, got {requested}")]
    InvalidQuantity { requested: i64 },

    /// Checkout was requested on an order with zero lines.
    #[error("Cannot checkout an empty order")]
    EmptyOrder,

    /// The store rejected or failed the commit. The session stays Active
    /// with the order unmodified; checkout can be retried.
    #[error("Persistence failed: {0}")]
    Persistence(#[from] DbError),
}

impl From<CoreError> for SessionError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidQuantity { requested } => {
                SessionError::InvalidQuantity { requested }
            }
            // The session only ever mutates its own open order; any other
            // core error reaching here is a bug worth surfacing loudly in
            // the persistence bucket rather than masking.
            other => SessionError::Persistence(DbError::Validation(other)),
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_quantity_maps_from_core() {
        let err: SessionError = CoreError::InvalidQuantity { requested: 0 }.into();
        assert!(matches!(err, SessionError::InvalidQuantity { requested: 0 }));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SessionError::SessionBusy.to_string(),
            "An order is already in progress; checkout or cancel it first"
        );
        assert_eq!(
            SessionError::EmptyOrder.to_string(),
            "Cannot checkout an empty order"
        );
    }
}
