//! # bistro-db: Database Layer for Bistro POS
//!
//! This crate provides durable storage for the order-taking engine.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Bistro POS Data Flow                        │
//! │                                                                 │
//! │  OrderSession (checkout, catalog lookups)                       │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌─────────────────────────────────────────────────────────┐    │
//! │  │                 bistro-db (THIS CRATE)                  │    │
//! │  │                                                         │    │
//! │  │  ┌────────────┐  ┌─────────────────┐  ┌─────────────┐   │    │
//! │  │  │  Database  │  │  Repositories   │  │ Migrations  │   │    │
//! │  │  │ (pool.rs)  │  │ (catalog.rs,    │  │ (embedded)  │   │    │
//! │  │  │            │◄─│  order.rs)      │  │ 001_init... │   │    │
//! │  │  └────────────┘  └─────────────────┘  └─────────────┘   │    │
//! │  └─────────────────────────────────────────────────────────┘    │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  SQLite database file (one per store)                           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Catalog and order repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bistro_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/bistro.db")).await?;
//!
//! let menu = db.catalog().list_available().await?;
//! let order_id = db.orders().commit(&order, total).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::catalog::CatalogRepository;
pub use repository::order::{
    DailyReport, OrderLineRecord, OrderRecord, OrderRepository, ReportedOrder,
};
