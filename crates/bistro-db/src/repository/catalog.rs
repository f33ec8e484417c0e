//! # Catalog Repository
//!
//! Database operations for menu items.
//!
//! ## Soft Delete
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Items are NEVER physically deleted.                            │
//! │                                                                 │
//! │  soft_delete(4) ──► UPDATE items SET is_available = 0           │
//! │                                                                 │
//! │  • get(4)               → None (absence is a normal outcome)    │
//! │  • list_available()     → never contains item 4                 │
//! │  • insert(item with 4)  → DuplicateItem (the id stays taken)    │
//! │  • committed orders referencing item 4 stay fully readable      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use bistro_core::MenuItem;

/// Columns of `items` mapped onto [`MenuItem`] field names.
const ITEM_COLUMNS: &str =
    "item_id AS id, name, description, price AS price_cents, is_available AS available, created_at";

/// Repository for menu item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = CatalogRepository::new(pool);
///
/// catalog.insert(&item).await?;
/// let menu = catalog.list_available().await?;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    /// Inserts a new menu item.
    ///
    /// ## Returns
    /// * `Ok(())` - Item stored durably
    /// * `Err(DbError::DuplicateItem)` - The id already exists, including
    ///   soft-deleted ids (those rows are retained forever)
    /// * `Err(DbError::Validation)` - Blank name or negative price
    pub async fn insert(&self, item: &MenuItem) -> DbResult<()> {
        debug!(id = item.id, name = %item.name, "Inserting menu item");

        if item.name.trim().is_empty() {
            return Err(bistro_core::CoreError::EmptyName.into());
        }
        if item.price_cents < 0 {
            return Err(bistro_core::CoreError::NegativePrice {
                cents: item.price_cents,
            }
            .into());
        }

        let result = sqlx::query(
            r#"
            INSERT INTO items (item_id, name, description, price, is_available, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price_cents)
        .bind(item.available)
        .bind(item.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err))
                if db_err.message().contains("UNIQUE constraint failed") =>
            {
                Err(DbError::DuplicateItem { id: item.id })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Gets an available menu item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(MenuItem))` - Item exists and is available
    /// * `Ok(None)` - Unknown id OR soft-deleted item; callers branch on
    ///   absence rather than handling an error
    pub async fn get(&self, id: i64) -> DbResult<Option<MenuItem>> {
        let item = sqlx::query_as::<_, MenuItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE item_id = ?1 AND is_available = 1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Lists available menu items, ordered by name ascending.
    ///
    /// Soft-deleted items never appear here; the partial index on
    /// `items(name) WHERE is_available = 1` serves this query directly.
    pub async fn list_available(&self) -> DbResult<Vec<MenuItem>> {
        let items = sqlx::query_as::<_, MenuItem>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE is_available = 1 ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed available items");
        Ok(items)
    }

    /// Overwrites name, description and price for an existing id.
    ///
    /// ## Returns
    /// * `Ok(true)` - Item updated
    /// * `Ok(false)` - No such id ("not found" is an outcome, not a failure)
    pub async fn update(&self, item: &MenuItem) -> DbResult<bool> {
        debug!(id = item.id, "Updating menu item");

        let result = sqlx::query(
            r#"
            UPDATE items
            SET name = ?2, description = ?3, price = ?4
            WHERE item_id = ?1
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price_cents)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Soft-deletes an item by setting `is_available = 0`.
    ///
    /// Idempotent: repeated calls succeed with no further effect. Returns
    /// `false` only when the id never existed.
    ///
    /// ## Why Soft Delete?
    /// Historical order lines hold a foreign reference to the item row;
    /// removing it would break committed orders.
    pub async fn soft_delete(&self, id: i64) -> DbResult<bool> {
        debug!(id = id, "Soft-deleting menu item");

        let result = sqlx::query("UPDATE items SET is_available = 0 WHERE item_id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts available items (for diagnostics).
    pub async fn count_available(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE is_available = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
