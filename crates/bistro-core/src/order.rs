//! # Order Module
//!
//! An in-progress or historical customer order.
//!
//! ## Invariants
//! - Lines are unique by item id: re-adding an item merges quantities
//!   instead of creating a duplicate line
//! - Every line quantity is positive
//! - Lines only change while the order is `Open`
//!
//! ## Why a map, not a list?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  add(burger, 2)  ──►  { 1: (burger, 2) }                        │
//! │  add(burger, 1)  ──►  { 1: (burger, 3) }   merge, not append    │
//! │  remove(1)       ──►  { }                  keyed removal        │
//! │                                                                 │
//! │  A list would allow two lines for the same burger, which makes  │
//! │  display and removal ambiguous. Keying by item id makes re-add  │
//! │  naturally an upsert.                                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::MenuItem;

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order is being built; lines may be added and removed.
    Open,
    /// Order was checked out and durably persisted. Immutable.
    Committed,
    /// Order was abandoned before checkout. Discarded, never persisted.
    Cancelled,
}

impl OrderStatus {
    /// Status label as persisted / displayed.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Committed => "committed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One (item, quantity) pair within an order.
///
/// The line holds a full copy of the item, so the price the customer saw is
/// the price that gets snapshotted into `price_at_order` at commit time,
/// regardless of later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The item as it looked when added to the order.
    pub item: MenuItem,

    /// Quantity ordered. Always positive.
    pub quantity: i64,
}

impl OrderLine {
    /// Line total before tax (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.item.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order: a set of lines keyed by item id, owned by a customer
/// name.
///
/// The `id` is a session-assigned placeholder while the order is open; after
/// a successful commit it is replaced with the store-generated identifier,
/// so the pre-commit value is client-visible but not durable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier (placeholder until committed).
    pub id: i64,

    /// Customer the order belongs to (may be empty).
    pub customer_name: String,

    /// Lines keyed by item id. Insertion order is not significant.
    lines: BTreeMap<i64, OrderLine>,

    /// Lifecycle status.
    pub status: OrderStatus,
}

impl Order {
    /// Creates a new open order.
    pub fn new(id: i64, customer_name: impl Into<String>) -> Self {
        Order {
            id,
            customer_name: customer_name.into(),
            lines: BTreeMap::new(),
            status: OrderStatus::Open,
        }
    }

    /// Adds an item to the order, merging with an existing line for the same
    /// item id.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidQuantity`] for `quantity <= 0`
    /// - [`CoreError::OrderNotOpen`] once committed or cancelled
    pub fn add_item(&mut self, item: MenuItem, quantity: i64) -> CoreResult<()> {
        self.ensure_open()?;

        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity {
                requested: quantity,
            });
        }

        self.lines
            .entry(item.id)
            .and_modify(|line| line.quantity += quantity)
            .or_insert(OrderLine { item, quantity });

        Ok(())
    }

    /// Removes the line for `item_id`.
    ///
    /// Returns whether a line was actually removed; removing an absent id is
    /// a no-op, so callers can treat removal as idempotent.
    pub fn remove_item(&mut self, item_id: i64) -> CoreResult<bool> {
        self.ensure_open()?;
        Ok(self.lines.remove(&item_id).is_some())
    }

    /// Iterates over the order's lines.
    pub fn lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines.values()
    }

    /// Looks up the line for an item id, if present.
    pub fn line(&self, item_id: i64) -> Option<&OrderLine> {
        self.lines.get(&item_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.values().map(|l| l.quantity).sum()
    }

    /// Whether the order has no lines. Empty orders cannot be committed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn ensure_open(&self) -> CoreResult<()> {
        if self.status != OrderStatus::Open {
            return Err(CoreError::OrderNotOpen {
                order_id: self.id,
                status: self.status.as_str().to_string(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, price_cents: i64) -> MenuItem {
        MenuItem::new(id, format!("Item {}", id), "", price_cents).unwrap()
    }

    #[test]
    fn test_add_item() {
        let mut order = Order::new(1, "Alice");
        order.add_item(item(1, 999), 2).unwrap();

        assert_eq!(order.line_count(), 1);
        assert_eq!(order.total_quantity(), 2);
        assert_eq!(order.line(1).unwrap().line_total().cents(), 1998);
    }

    #[test]
    fn test_re_add_merges_quantity() {
        let mut order = Order::new(1, "Alice");
        order.add_item(item(1, 999), 2).unwrap();
        order.add_item(item(1, 999), 1).unwrap();

        // Still one line for item 1, quantity accumulated
        assert_eq!(order.line_count(), 1);
        assert_eq!(order.line(1).unwrap().quantity, 3);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut order = Order::new(1, "");
        assert_eq!(
            order.add_item(item(1, 999), 0).unwrap_err(),
            CoreError::InvalidQuantity { requested: 0 }
        );
        assert_eq!(
            order.add_item(item(1, 999), -3).unwrap_err(),
            CoreError::InvalidQuantity { requested: -3 }
        );
        assert!(order.is_empty());
    }

    #[test]
    fn test_remove_item() {
        let mut order = Order::new(1, "");
        order.add_item(item(1, 999), 2).unwrap();
        order.add_item(item(2, 349), 1).unwrap();

        assert!(order.remove_item(1).unwrap());
        assert_eq!(order.line_count(), 1);
        assert!(order.line(1).is_none());

        // Removing an absent id is a no-op, not an error
        assert!(!order.remove_item(1).unwrap());
        assert_eq!(order.line_count(), 1);
    }

    #[test]
    fn test_quantities_track_additions() {
        let mut order = Order::new(1, "");
        order.add_item(item(1, 100), 1).unwrap();
        order.add_item(item(2, 200), 4).unwrap();
        order.add_item(item(1, 100), 2).unwrap();
        order.remove_item(2).unwrap();

        assert_eq!(order.line_count(), 1);
        assert_eq!(order.line(1).unwrap().quantity, 3);
    }

    #[test]
    fn test_closed_order_is_immutable() {
        let mut order = Order::new(4, "Bob");
        order.add_item(item(1, 999), 1).unwrap();
        order.status = OrderStatus::Committed;

        assert!(matches!(
            order.add_item(item(2, 100), 1),
            Err(CoreError::OrderNotOpen { order_id: 4, .. })
        ));
        assert!(matches!(
            order.remove_item(1),
            Err(CoreError::OrderNotOpen { .. })
        ));
        assert_eq!(order.line_count(), 1);
    }
}
