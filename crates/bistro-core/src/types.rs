//! # Domain Types
//!
//! Menu catalog types used throughout Bistro POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Domain Types                             │
//! │                                                                 │
//! │  ┌─────────────────┐        ┌─────────────────┐                 │
//! │  │    MenuItem     │        │     TaxRate     │                 │
//! │  │  ─────────────  │        │  ─────────────  │                 │
//! │  │  id (i64)       │        │  bps (u32)      │                 │
//! │  │  name           │        │  700 = 7%       │                 │
//! │  │  description    │        └─────────────────┘                 │
//! │  │  price_cents    │                                            │
//! │  │  available      │   Order / OrderLine live in `order`        │
//! │  └─────────────────┘                                            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Convention
//! Catalog items carry positive ids assigned by whoever seeds the menu.
//! Negative ids are reserved for ad-hoc items typed in at the counter
//! (see [`crate::CUSTOM_ITEM_ID_MAX`]); they never appear in availability
//! listings but still satisfy referential integrity once an order
//! referencing them is committed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 700 bps = 7% (the default checkout rate)
///
/// Integer basis points keep the tax computation in pure integer math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate(crate::DEFAULT_TAX_RATE_BPS)
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A food or drink item on the menu.
///
/// ## Soft Delete
/// Items are never removed from the catalog: historical order lines hold a
/// foreign reference to them. Deleting an item flips `available` to false,
/// which hides it from lookups and listings while keeping the row (and every
/// committed order that mentions it) intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MenuItem {
    /// Unique identifier. Positive for catalog items, negative for ad-hoc
    /// items created during order taking.
    pub id: i64,

    /// Display name shown to the cashier and on the receipt.
    pub name: String,

    /// Optional description (may be empty).
    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Whether the item can currently be ordered (soft delete flag).
    pub available: bool,

    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

impl MenuItem {
    /// Creates a new catalog item, validating name and price.
    ///
    /// ## Errors
    /// - [`CoreError::EmptyName`] if `name` is blank
    /// - [`CoreError::NegativePrice`] if `price_cents < 0`
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        price_cents: i64,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        if price_cents < 0 {
            return Err(CoreError::NegativePrice { cents: price_cents });
        }

        Ok(MenuItem {
            id,
            name,
            description: description.into(),
            price_cents,
            available: true,
            created_at: Utc::now(),
        })
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether this is an ad-hoc item from the reserved negative id range.
    #[inline]
    pub const fn is_custom(&self) -> bool {
        self.id <= crate::CUSTOM_ITEM_ID_MAX
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
