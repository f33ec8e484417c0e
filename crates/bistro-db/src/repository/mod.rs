//! # Repository Module
//!
//! Database repository implementations for Bistro POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  The Repository pattern abstracts database access behind a      │
//! │  clean API.                                                     │
//! │                                                                 │
//! │  OrderSession / admin tooling                                   │
//! │       │                                                         │
//! │       │  db.catalog().get(3)                                    │
//! │       │  db.orders().commit(&order, total)                      │
//! │       ▼                                                         │
//! │  CatalogRepository / OrderRepository                            │
//! │       │                                                         │
//! │       │  SQL                                                    │
//! │       ▼                                                         │
//! │  SQLite Database                                                │
//! │                                                                 │
//! │  Benefits:                                                      │
//! │  • SQL is isolated in one place                                 │
//! │  • Clean separation of concerns                                 │
//! │  • Easy to exercise against an in-memory database in tests      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`catalog::CatalogRepository`] - Menu item CRUD and listings
//! - [`order::OrderRepository`] - Transactional order commit and reporting

pub mod catalog;
pub mod order;
