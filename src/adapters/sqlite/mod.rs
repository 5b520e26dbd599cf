//! SQLite adapters: the content store the index reads from and a persistent
//! TTL cache.

pub mod cache_store;
pub mod connection;
pub mod content_store;
pub mod migrations;

pub use cache_store::SqliteCacheStore;
pub use connection::{
    create_pool, create_test_pool, database_url, verify_connection, ConnectionError, PoolConfig,
};
pub use content_store::SqliteContentStore;
pub use migrations::{all_embedded_migrations, Migration, MigrationError, Migrator};

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};

/// Parse an RFC3339 datetime string from a SQLite row field.
pub fn parse_datetime(s: &str) -> DomainResult<DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| DomainError::SerializationError(e.to_string()))
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a datetime as fixed-width RFC3339 UTC, so stored values compare
/// correctly as text.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Errors opening and migrating a database.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// The pool could not be opened.
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
    /// A migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),
}

/// Open a pool and apply every pending migration.
pub async fn initialize_database(database_url: &str, config: Option<PoolConfig>) -> Result<SqlitePool, DatabaseError> {
    let pool = create_pool(database_url, config).await?;
    let migrator = Migrator::new(pool.clone());
    migrator.run_embedded_migrations(all_embedded_migrations()).await?;
    Ok(pool)
}

/// Create an in-memory test pool with all migrations applied.
pub async fn create_migrated_test_pool() -> Result<SqlitePool, DatabaseError> {
    let pool = create_test_pool().await?;
    let migrator = Migrator::new(pool.clone());
    migrator.run_embedded_migrations(all_embedded_migrations()).await?;
    Ok(pool)
}
