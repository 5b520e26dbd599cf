//! Cache store port.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::errors::DomainResult;

/// Port for a shared key-value store with per-entry time-to-live.
///
/// Values are opaque strings; callers serialize their own payloads.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get a value by key
    ///
    /// # Returns
    /// * `Ok(Some(value))` if present and not expired
    /// * `Ok(None)` on a miss, including expired entries
    /// * `Err(DomainError)` if the store could not be read
    async fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Store a value under `key`, replacing any previous value, for `ttl`.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> DomainResult<()>;

    /// Delete a key. Returns whether an entry was removed.
    async fn delete(&self, key: &str) -> DomainResult<bool>;
}
