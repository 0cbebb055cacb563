//! Persistence for the site registry
//!
//! The registry is stored as one JSON document under a single key in a
//! local key-value table.

pub mod migrations;
pub mod repository;

pub use repository::{LibsqlStore, MemoryStore, SiteStore};

use anyhow::Result;

/// Initialize database with schema
pub async fn initialize_database(conn: &libsql::Connection) -> Result<()> {
    migrations::run_migrations(conn).await
}

/// Seconds since the Unix epoch
pub(crate) fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
