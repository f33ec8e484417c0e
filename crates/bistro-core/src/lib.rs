//! # bistro-core: Pure Business Logic for Bistro POS
//!
//! This crate is the heart of the order-taking engine. It contains the menu
//! and order domain types plus the checkout math, all as pure code with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Bistro POS Data Flow                        │
//! │                                                                 │
//! │  GUI shell / report scripts (external clients)                  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  bistro-session (OrderSession state machine)                    │
//! │       │                                                         │
//! │  ┌────▼────────────────────────────────────────────────────┐    │
//! │  │              ★ bistro-core (THIS CRATE) ★               │    │
//! │  │                                                         │    │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐      │    │
//! │  │  │  types  │ │  money  │ │  order  │ │ checkout │      │    │
//! │  │  │MenuItem │ │  Money  │ │  Order  │ │  totals  │      │    │
//! │  │  │ TaxRate │ │ TaxCalc │ │OrderLine│ │ with tax │      │    │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘      │    │
//! │  │                                                         │    │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS     │    │
//! │  └────┬────────────────────────────────────────────────────┘    │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  bistro-db (SQLite queries, migrations, repositories)           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Menu domain types (MenuItem, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`order`] - Order and OrderLine with quantity-merge semantics
//! - [`checkout`] - Pure checkout total calculation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, checkout is repeatable
//! 2. **No I/O**: database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are in cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::money::Money;
//! use bistro_core::types::TaxRate;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(999); // $9.99
//!
//! let rate = TaxRate::from_bps(700); // 7%
//! let tax = price.calculate_tax(rate);
//! assert_eq!(tax.cents(), 70);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod money;
pub mod order;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{order_subtotal, order_total};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use order::{Order, OrderLine, OrderStatus};
pub use types::{MenuItem, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tax rate in basis points (700 bps = 7%).
///
/// Applied at checkout time only; committed orders persist the tax-inclusive
/// total they were charged, so changing this constant never rewrites history.
pub const DEFAULT_TAX_RATE_BPS: u32 = 700;

/// Upper bound (inclusive) of the id range reserved for ad-hoc items.
///
/// Catalog-assigned ids are positive. Items typed in at the counter during
/// order taking use negative ids so they can never collide with the catalog.
pub const CUSTOM_ITEM_ID_MAX: i64 = -1;
