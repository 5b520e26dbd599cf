//! Null cache store implementation.
//!
//! Used when caching is disabled but the index still requires a
//! CacheStore implementation. Every read is a miss.

use async_trait::async_trait;
use std::time::Duration;

use super::CacheStore;
use crate::domain::errors::DomainResult;

/// A no-op cache store that stores nothing.
#[derive(Debug, Clone, Default)]
pub struct NullCacheStore;

impl NullCacheStore {
    /// Create a null cache store.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheStore for NullCacheStore {
    async fn get(&self, _key: &str) -> DomainResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> DomainResult<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> DomainResult<bool> {
        Ok(false)
    }
}
