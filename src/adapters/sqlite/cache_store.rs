//! SQLite implementation of the CacheStore.
//!
//! Entries live in `cache_entries` with an absolute `expires_at`. Expired
//! rows read as a miss and are deleted on access; `purge_expired` sweeps
//! the rest.

use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::{format_datetime, parse_datetime};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::CacheEntry;
use crate::domain::ports::{CacheStore, Clock, SystemClock};

/// Cache store over the `cache_entries` table.
#[derive(Clone)]
pub struct SqliteCacheStore {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteCacheStore {
    /// Create a store that expires entries by the system clock.
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_clock(pool, Arc::new(SystemClock))
    }

    /// Create a store with an injected clock.
    pub fn with_clock(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    /// Fetch the raw entry for `key`, expired or not.
    pub async fn entry(&self, key: &str) -> DomainResult<Option<CacheEntry>> {
        let row: Option<(String, String, String)> =
            sqlx::query_as("SELECT key, value, expires_at FROM cache_entries WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some((key, value, expires_at)) => Ok(Some(CacheEntry::new(key, value, parse_datetime(&expires_at)?))),
            None => Ok(None),
        }
    }

    /// Delete every expired entry. Returns the number removed.
    pub async fn purge_expired(&self) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM cache_entries WHERE expires_at <= ?")
            .bind(format_datetime(self.clock.now()))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl CacheStore for SqliteCacheStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let Some(entry) = self.entry(key).await? else {
            return Ok(None);
        };

        if entry.is_expired(self.clock.now()) {
            debug!(key, expires_at = %entry.expires_at, "dropping expired cache entry");
            sqlx::query("DELETE FROM cache_entries WHERE key = ? AND expires_at = ?")
                .bind(key)
                .bind(format_datetime(entry.expires_at))
                .execute(&self.pool)
                .await?;
            return Ok(None);
        }

        Ok(Some(entry.value))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> DomainResult<()> {
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|e| DomainError::CacheStore(format!("ttl out of range: {e}")))?;
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .ok_or_else(|| DomainError::CacheStore("ttl out of range".to_string()))?;

        sqlx::query(
            r#"INSERT INTO cache_entries (key, value, expires_at) VALUES (?, ?, ?)
               ON CONFLICT(key) DO UPDATE SET value = excluded.value, expires_at = excluded.expires_at"#
        )
        .bind(key)
        .bind(value)
        .bind(format_datetime(expires_at))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM cache_entries WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
