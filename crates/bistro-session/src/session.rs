//! # Order Session
//!
//! The per-terminal order-taking state machine.
//!
//! ## Single-Owner Model
//! A session is an explicitly constructed value with one exclusive owner per
//! logical terminal; it is never a process-wide singleton. Multiple sessions
//! coexist against one shared [`Database`], serialized only by the store's
//! transactional commit. Within a session every operation runs to completion
//! before the next is accepted (plain `&mut self`, no interior mutability).
//!
//! ## Checkout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  checkout()                                                     │
//! │     │                                                           │
//! │     ├── no active order? ──► NoActiveOrder (stay Idle)          │
//! │     ├── zero lines? ───────► EmptyOrder  (stay Active)          │
//! │     │                                                           │
//! │     ├── total = order_total(order, tax_rate)                    │
//! │     ├── store.commit(order, total)                              │
//! │     │        │                                                  │
//! │     │        ├── Err ──► Persistence (stay Active, retryable)   │
//! │     │        └── Ok(order_id)                                   │
//! │     │                                                           │
//! │     ├── stamp store id + Committed status onto the order        │
//! │     ├── append to in-memory history (cache; store is truth)     │
//! │     └── transition to Idle, return Receipt                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use bistro_core::{order_total, MenuItem, Money, Order, OrderStatus, TaxRate};
use bistro_db::Database;

use crate::error::{SessionError, SessionResult};

/// Summary of a successful checkout, for display/printing.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    /// The store-generated order id.
    pub order_id: i64,
    /// Tax-inclusive total the customer was charged.
    pub total: Money,
}

/// The order-taking state machine for one terminal.
///
/// Holds zero or one open [`Order`] plus an append-only list of committed
/// orders observed during the process lifetime. The history is a convenience
/// cache; the store is authoritative for anything that must survive a
/// restart.
#[derive(Debug)]
pub struct OrderSession {
    db: Database,
    tax_rate: TaxRate,
    active: Option<Order>,
    history: Vec<Order>,
    /// Placeholder ids handed to open orders before the store assigns the
    /// real one at commit.
    next_placeholder_id: i64,
}

impl OrderSession {
    /// Creates a session against a shared database, charging the default
    /// tax rate at checkout.
    pub fn new(db: Database) -> Self {
        Self::with_tax_rate(db, TaxRate::default())
    }

    /// Creates a session with an explicit tax rate.
    ///
    /// The rate applies to future checkouts only; orders already committed
    /// persist the total they were charged.
    pub fn with_tax_rate(db: Database, tax_rate: TaxRate) -> Self {
        OrderSession {
            db,
            tax_rate,
            active: None,
            history: Vec::new(),
            next_placeholder_id: 1,
        }
    }

    /// Whether the session has no order in progress.
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// The open order, if any.
    pub fn active_order(&self) -> Option<&Order> {
        self.active.as_ref()
    }

    /// Orders committed by this session, oldest first.
    pub fn history(&self) -> &[Order] {
        &self.history
    }

    /// Starts a new open order for `customer_name`.
    ///
    /// ## Errors
    /// [`SessionError::SessionBusy`] if an order is already in progress;
    /// the existing order is left untouched.
    pub fn start_new_order(&mut self, customer_name: &str) -> SessionResult<&Order> {
        if self.active.is_some() {
            return Err(SessionError::SessionBusy);
        }

        let id = self.next_placeholder_id;
        self.next_placeholder_id += 1;

        debug!(order_id = id, customer = customer_name, "Starting new order");
        Ok(self.active.insert(Order::new(id, customer_name)))
    }

    /// Adds `quantity` of `item` to the open order, merging with an existing
    /// line for the same item id.
    ///
    /// ## Errors
    /// - [`SessionError::NoActiveOrder`] from idle
    /// - [`SessionError::InvalidQuantity`] for `quantity <= 0`
    pub fn add_item(&mut self, item: MenuItem, quantity: i64) -> SessionResult<()> {
        let order = self.active.as_mut().ok_or(SessionError::NoActiveOrder)?;
        order.add_item(item, quantity)?;
        Ok(())
    }

    /// Removes the line for `item_id` from the open order.
    ///
    /// Removing an id not present is a no-op, not an error.
    pub fn remove_item(&mut self, item_id: i64) -> SessionResult<()> {
        let order = self.active.as_mut().ok_or(SessionError::NoActiveOrder)?;
        let removed = order.remove_item(item_id)?;
        debug!(item_id, removed, "Remove item");
        Ok(())
    }

    /// Checks out the open order: computes the tax-inclusive total, commits
    /// order and lines atomically, records it in history and returns a
    /// [`Receipt`].
    ///
    /// ## Errors
    /// - [`SessionError::NoActiveOrder`] from idle
    /// - [`SessionError::EmptyOrder`] on zero lines; session stays Active
    /// - [`SessionError::Persistence`] if the store commit fails; session
    ///   stays Active with the order unmodified so checkout can be retried
    pub async fn checkout(&mut self) -> SessionResult<Receipt> {
        let order = self.active.as_ref().ok_or(SessionError::NoActiveOrder)?;

        if order.is_empty() {
            return Err(SessionError::EmptyOrder);
        }

        let total = order_total(order, self.tax_rate);

        // The order is taken out of the session only after the store
        // confirms the commit; the early returns above and the `?` below
        // leave `self.active` (and the order) exactly as they were.
        let order_id = self.db.orders().commit(order, total).await?;

        let mut committed = self.active.take().expect("checked above");
        committed.id = order_id;
        committed.status = OrderStatus::Committed;

        info!(order_id, total = %total, "Order checked out");
        self.history.push(committed);

        Ok(Receipt { order_id, total })
    }

    /// Cancels the open order, discarding it entirely (not added to
    /// history, nothing persisted).
    ///
    /// ## Errors
    /// [`SessionError::NoActiveOrder`] from idle.
    pub fn cancel_order(&mut self) -> SessionResult<()> {
        let mut order = self.active.take().ok_or(SessionError::NoActiveOrder)?;
        order.status = OrderStatus::Cancelled;

        info!(order_id = order.id, "Order cancelled");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_db::{DbConfig, DbError};

    async fn test_session() -> OrderSession {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let catalog = db.catalog();
        for (id, name, price) in [
            (1i64, "Cheeseburger", 999i64),
            (2, "Fries", 399),
            (3, "Coke", 249),
        ] {
            catalog
                .insert(&MenuItem::new(id, name, "", price).unwrap())
                .await
                .unwrap();
        }

        OrderSession::new(db)
    }

    fn item(id: i64, price_cents: i64) -> MenuItem {
        MenuItem::new(id, format!("Item {}", id), "", price_cents).unwrap()
    }

    #[tokio::test]
    async fn test_full_order_workflow() {
        let mut session = test_session().await;
        assert!(session.is_idle());

        session.start_new_order("Alice").unwrap();
        assert!(!session.is_idle());

        // Re-adding item 1 merges into a single line of quantity 3
        session.add_item(item(1, 999), 2).unwrap();
        session.add_item(item(1, 999), 1).unwrap();
        let order = session.active_order().unwrap();
        assert_eq!(order.line_count(), 1);
        assert_eq!(order.line(1).unwrap().quantity, 3);

        // 3 × $9.99 = $29.97; +7% → $32.07
        let receipt = session.checkout().await.unwrap();
        assert_eq!(receipt.total.cents(), 3207);
        assert!(receipt.order_id > 0);

        assert!(session.is_idle());
        assert_eq!(session.history().len(), 1);

        let committed = &session.history()[0];
        assert_eq!(committed.id, receipt.order_id);
        assert_eq!(committed.status, OrderStatus::Committed);
    }

    #[tokio::test]
    async fn test_start_while_active_is_busy() {
        let mut session = test_session().await;

        session.start_new_order("Alice").unwrap();
        session.add_item(item(1, 999), 1).unwrap();

        assert!(matches!(
            session.start_new_order("Bob"),
            Err(SessionError::SessionBusy)
        ));

        // The original order is untouched
        let order = session.active_order().unwrap();
        assert_eq!(order.customer_name, "Alice");
        assert_eq!(order.line_count(), 1);
    }

    #[tokio::test]
    async fn test_operations_from_idle_fail() {
        let mut session = test_session().await;

        assert!(matches!(
            session.add_item(item(1, 999), 1),
            Err(SessionError::NoActiveOrder)
        ));
        assert!(matches!(
            session.remove_item(1),
            Err(SessionError::NoActiveOrder)
        ));
        assert!(matches!(
            session.checkout().await,
            Err(SessionError::NoActiveOrder)
        ));
        assert!(matches!(
            session.cancel_order(),
            Err(SessionError::NoActiveOrder)
        ));
    }

    #[tokio::test]
    async fn test_invalid_quantity_rejected() {
        let mut session = test_session().await;
        session.start_new_order("").unwrap();

        assert!(matches!(
            session.add_item(item(1, 999), 0),
            Err(SessionError::InvalidQuantity { requested: 0 })
        ));
        assert!(session.active_order().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_absent_item_is_noop() {
        let mut session = test_session().await;
        session.start_new_order("").unwrap();
        session.add_item(item(1, 999), 1).unwrap();

        session.remove_item(42).unwrap();
        assert_eq!(session.active_order().unwrap().line_count(), 1);

        session.remove_item(1).unwrap();
        assert!(session.active_order().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_checkout_stays_active() {
        let mut session = test_session().await;
        session.start_new_order("Alice").unwrap();

        assert!(matches!(
            session.checkout().await,
            Err(SessionError::EmptyOrder)
        ));

        // Still Active: the caller can add items and try again
        assert!(!session.is_idle());
        session.add_item(item(3, 249), 1).unwrap();
        assert!(session.checkout().await.is_ok());
    }

    #[tokio::test]
    async fn test_failed_commit_keeps_order_for_retry() {
        let mut session = test_session().await;
        session.start_new_order("Bob").unwrap();
        session.add_item(item(1, 999), 1).unwrap();
        // Positive id missing from the catalog: the commit transaction
        // hits the foreign key and rolls back
        session.add_item(item(77, 500), 2).unwrap();

        let err = session.checkout().await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Persistence(DbError::ForeignKeyViolation { .. })
        ));

        // Session stays Active with the order unmodified
        let order = session.active_order().unwrap();
        assert_eq!(order.line_count(), 2);
        assert!(session.history().is_empty());

        // Dropping the offending line makes the retry succeed
        session.remove_item(77).unwrap();
        let receipt = session.checkout().await.unwrap();
        assert_eq!(receipt.total.cents(), 1069); // $9.99 + 7%
        assert!(session.is_idle());
    }

    #[tokio::test]
    async fn test_cancel_discards_order() {
        let mut session = test_session().await;
        session.start_new_order("Alice").unwrap();
        session.add_item(item(1, 999), 2).unwrap();

        session.cancel_order().unwrap();

        assert!(session.is_idle());
        assert!(session.history().is_empty());

        // Nothing was persisted
        let (orders, lines) = session.db.orders().row_counts().await.unwrap();
        assert_eq!(orders, 0);
        assert_eq!(lines, 0);
    }

    #[tokio::test]
    async fn test_tax_rate_change_does_not_rewrite_history() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.catalog()
            .insert(&MenuItem::new(1, "Coke", "", 1000).unwrap())
            .await
            .unwrap();

        let mut session = OrderSession::with_tax_rate(db.clone(), TaxRate::from_bps(700));
        session.start_new_order("").unwrap();
        session.add_item(item(1, 1000), 1).unwrap();
        let receipt = session.checkout().await.unwrap();
        assert_eq!(receipt.total.cents(), 1070);

        // A later session at a different rate charges differently, but the
        // committed total is untouched
        let mut later = OrderSession::with_tax_rate(db.clone(), TaxRate::from_bps(1000));
        later.start_new_order("").unwrap();
        later.add_item(item(1, 1000), 1).unwrap();
        let second = later.checkout().await.unwrap();
        assert_eq!(second.total.cents(), 1100);

        let recent = db.orders().list_recent(10).await.unwrap();
        let first = recent
            .iter()
            .find(|o| o.order_id == receipt.order_id)
            .unwrap();
        assert_eq!(first.total_amount, 1070);
    }

    #[tokio::test]
    async fn test_two_sessions_share_one_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.catalog()
            .insert(&MenuItem::new(1, "Coke", "", 249).unwrap())
            .await
            .unwrap();

        let mut terminal_a = OrderSession::new(db.clone());
        let mut terminal_b = OrderSession::new(db.clone());

        terminal_a.start_new_order("A").unwrap();
        terminal_b.start_new_order("B").unwrap();
        terminal_a.add_item(item(1, 249), 1).unwrap();
        terminal_b.add_item(item(1, 249), 2).unwrap();

        let ra = terminal_a.checkout().await.unwrap();
        let rb = terminal_b.checkout().await.unwrap();
        assert_ne!(ra.order_id, rb.order_id);

        assert_eq!(db.orders().list_recent(10).await.unwrap().len(), 2);
    }
}
