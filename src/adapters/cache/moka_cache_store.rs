//! In-process CacheStore backed by a moka TTL cache.
//!
//! Each entry carries its own TTL, enforced through a moka `Expiry` policy,
//! so a single cache instance can hold values with different lifetimes.
//! Entries are lost when the process exits.

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::errors::DomainResult;
use crate::domain::ports::CacheStore;

/// Maximum number of cached entries.
const DEFAULT_MAX_CAPACITY: u64 = 10_000;

#[derive(Clone)]
struct TtlValue {
    value: Arc<str>,
    ttl: Duration,
}

/// Expire every entry `ttl` after it was last written.
struct PerEntryTtl;

impl Expiry<String, TtlValue> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, value: &TtlValue, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &TtlValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Moka-backed cache store.
pub struct MokaCacheStore {
    entries: Cache<String, TtlValue>,
}

impl MokaCacheStore {
    /// Create a cache store with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CAPACITY)
    }

    /// Create with a custom maximum entry count.
    pub fn with_capacity(max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { entries }
    }
}

impl Default for MokaCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MokaCacheStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.get(key).await.map(|entry| entry.value.to_string()))
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> DomainResult<()> {
        self.entries
            .insert(
                key.to_string(),
                TtlValue {
                    value: Arc::from(value),
                    ttl,
                },
            )
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> DomainResult<bool> {
        Ok(self.entries.remove(key).await.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = MokaCacheStore::new();

        cache.set("k", "v".to_string(), Duration::from_secs(60)).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v"));

        assert!(cache.delete("k").await.unwrap());
        assert!(cache.get("k").await.unwrap().is_none());
        assert!(!cache.delete("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_entry_expires_after_its_ttl() {
        let cache = MokaCacheStore::new();

        cache.set("short", "a".to_string(), Duration::from_millis(50)).await.unwrap();
        cache.set("long", "b".to_string(), Duration::from_secs(60)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(cache.get("short").await.unwrap().is_none());
        assert_eq!(cache.get("long").await.unwrap().as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_overwrite_resets_ttl() {
        let cache = MokaCacheStore::new();

        cache.set("k", "old".to_string(), Duration::from_millis(50)).await.unwrap();
        cache.set("k", "new".to_string(), Duration::from_secs(60)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("new"));
    }
}
