//! # Menu Seeder
//!
//! Populates the database with the starter menu.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p bistro-db --bin seed
//!
//! # Specify a database path
//! cargo run -p bistro-db --bin seed -- --db ./data/bistro.db
//! ```
//!
//! Items that already exist are reported and skipped, so re-running the
//! seeder against a live database is harmless.

use std::env;

use bistro_core::MenuItem;
use bistro_db::{Database, DbConfig, DbError};
use tracing::{info, warn};

/// The starter menu: (id, name, description, price in cents).
const STARTER_MENU: &[(i64, &str, &str, i64)] = &[
    (1, "Cheeseburger", "Classic cheeseburger", 999),
    (2, "Beef Burger", "Plain beef burger", 899),
    (3, "Fries", "French fries", 399),
    (4, "Coke", "Coca Cola", 249),
    (5, "Water", "Bottled water", 199),
];

#[tokio::main]
async fn main() -> Result<(), DbError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let db_path = parse_db_path().unwrap_or_else(|| "bistro.db".to_string());

    info!(path = %db_path, "Seeding starter menu");
    let db = Database::new(DbConfig::new(&db_path)).await?;
    let catalog = db.catalog();

    let mut added = 0usize;
    for &(id, name, description, price_cents) in STARTER_MENU {
        let item = MenuItem::new(id, name, description, price_cents)
            .map_err(DbError::Validation)?;

        match catalog.insert(&item).await {
            Ok(()) => {
                info!(id, name, price = %item.price(), "Added");
                added += 1;
            }
            Err(DbError::DuplicateItem { id }) => {
                warn!(id, name, "Already in catalog, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        added,
        total = catalog.count_available().await?,
        "Menu seeding complete"
    );
    db.close().await;
    Ok(())
}

/// Parses `--db <path>` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
