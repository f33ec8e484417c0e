//! # Order Repository
//!
//! Transactional order commit and reporting queries.
//!
//! ## Commit Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Order Commit (one transaction)                │
//! │                                                                 │
//! │  BEGIN                                                          │
//! │    INSERT orders (customer, now, total, 'completed')            │
//! │    ├── line 1 ── INSERT order_items (…, price_at_order)         │
//! │    ├── line 2 ── INSERT order_items (…, price_at_order)         │
//! │    └── ad-hoc line ── upsert unavailable items row first        │
//! │  COMMIT                                                         │
//! │                                                                 │
//! │  Any failure mid-transaction rolls everything back: no partial  │
//! │  order or partial line set is ever visible.                     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price Snapshot
//! Each line stores `price_at_order`, the item's price at commit time.
//! Historical reports read ONLY this column, never the live catalog price,
//! so later price edits cannot rewrite past totals.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;
use bistro_core::{Money, Order};

// =============================================================================
// Persisted Record Types
// =============================================================================

/// One committed order row, as persisted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderRecord {
    pub order_id: i64,
    pub customer_name: String,
    pub order_date: DateTime<Utc>,
    /// Tax-inclusive total captured at commit time, in cents.
    pub total_amount: i64,
    pub status: String,
}

impl OrderRecord {
    /// The committed total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_amount)
    }
}

/// One committed order line, read back for reporting.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderLineRecord {
    pub item_id: i64,
    /// Item name from the catalog row (names are join-safe; prices are not).
    pub name: String,
    pub quantity: i64,
    /// Price snapshot in cents, frozen at commit time.
    pub price_at_order: i64,
}

impl OrderLineRecord {
    /// Line total computed from the snapshot price only.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.price_at_order).multiply_quantity(self.quantity)
    }
}

/// A committed order together with its lines, for reporting consumers.
#[derive(Debug, Clone, Serialize)]
pub struct ReportedOrder {
    pub order: OrderRecord,
    pub lines: Vec<OrderLineRecord>,
}

/// Every order committed on one date, with day-level summary accessors.
/// The source material for end-of-day summaries.
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub day: NaiveDate,
    pub orders: Vec<ReportedOrder>,
}

impl DailyReport {
    /// Number of orders committed on this day.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Revenue for the day (sum of committed tax-inclusive totals).
    pub fn revenue(&self) -> Money {
        self.orders
            .iter()
            .fold(Money::zero(), |acc, o| acc + o.order.total())
    }

    /// Average order value, `None` on a day with no orders.
    pub fn average_order_value(&self) -> Option<Money> {
        if self.orders.is_empty() {
            return None;
        }
        Some(Money::from_cents(
            self.revenue().cents() / self.orders.len() as i64,
        ))
    }
}

// =============================================================================
// Order Repository
// =============================================================================

/// Repository for committed-order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Commits a finalized order and all its lines in one atomic
    /// transaction.
    ///
    /// ## What This Does
    /// 1. Inserts the order row, capturing `total`, the current timestamp
    ///    and status `completed`
    /// 2. Inserts one `order_items` row per line, snapshotting the line's
    ///    item price into `price_at_order`
    /// 3. For ad-hoc items (negative ids) first materializes an unavailable
    ///    `items` row inside the same transaction, keeping the foreign key
    ///    satisfied without ever surfacing the item in catalog listings
    ///
    /// On any failure the transaction rolls back completely and the error is
    /// surfaced; the store never holds a partial order.
    ///
    /// ## Returns
    /// The store-generated `order_id`. The caller's pre-commit order id is a
    /// placeholder and is expected to be replaced with this value.
    pub async fn commit(&self, order: &Order, total: Money) -> DbResult<i64> {
        debug!(
            placeholder_id = order.id,
            customer = %order.customer_name,
            lines = order.line_count(),
            "Committing order"
        );

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO orders (customer_name, order_date, total_amount, status)
            VALUES (?1, ?2, ?3, 'completed')
            "#,
        )
        .bind(&order.customer_name)
        .bind(now)
        .bind(total.cents())
        .execute(&mut *tx)
        .await?;

        let order_id = result.last_insert_rowid();

        for line in order.lines() {
            if line.item.is_custom() {
                // Ad-hoc item typed in at the counter: persist it once,
                // unavailable, so the line's foreign key holds while catalog
                // listings never see it.
                sqlx::query(
                    r#"
                    INSERT OR IGNORE INTO items
                        (item_id, name, description, price, is_available, created_at)
                    VALUES (?1, ?2, ?3, ?4, 0, ?5)
                    "#,
                )
                .bind(line.item.id)
                .bind(&line.item.name)
                .bind(&line.item.description)
                .bind(line.item.price_cents)
                .bind(now)
                .execute(&mut *tx)
                .await?;
            }

            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, item_id, quantity, price_at_order)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(order_id)
            .bind(line.item.id)
            .bind(line.quantity)
            .bind(line.item.price_cents)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        info!(order_id, total = %total, lines = order.line_count(), "Order committed");
        Ok(order_id)
    }

    /// Returns the most recent `limit` committed orders, newest first.
    pub async fn list_recent(&self, limit: u32) -> DbResult<Vec<OrderRecord>> {
        let orders = sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT order_id, customer_name, order_date, total_amount, status
            FROM orders
            ORDER BY order_date DESC, order_id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Builds the end-of-day report for `day`: every order committed on that
    /// date with its line items.
    ///
    /// Per-line totals come exclusively from `price_at_order`; the join to
    /// `items` fetches names only, never the live price.
    pub async fn daily_report(&self, day: NaiveDate) -> DbResult<DailyReport> {
        let day_key = day.format("%Y-%m-%d").to_string();

        let orders = sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT order_id, customer_name, order_date, total_amount, status
            FROM orders
            WHERE date(order_date) = ?1
            ORDER BY order_date, order_id
            "#,
        )
        .bind(&day_key)
        .fetch_all(&self.pool)
        .await?;

        let mut reported = Vec::with_capacity(orders.len());
        for order in orders {
            let lines = sqlx::query_as::<_, OrderLineRecord>(
                r#"
                SELECT oi.item_id, i.name, oi.quantity, oi.price_at_order
                FROM order_items oi
                JOIN items i ON i.item_id = oi.item_id
                WHERE oi.order_id = ?1
                ORDER BY oi.id
                "#,
            )
            .bind(order.order_id)
            .fetch_all(&self.pool)
            .await?;

            reported.push(ReportedOrder { order, lines });
        }

        debug!(day = %day_key, orders = reported.len(), "Built daily report");
        Ok(DailyReport {
            day,
            orders: reported,
        })
    }

    /// Counts rows in `orders` and `order_items` (for diagnostics).
    pub async fn row_counts(&self) -> DbResult<(i64, i64)> {
        let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;
        let lines: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items")
            .fetch_one(&self.pool)
            .await?;
        Ok((orders, lines))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
