//! Cache domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored cache value with its absolute expiry time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Cache key.
    pub key: String,
    /// Opaque serialized value.
    pub value: String,
    /// First instant at which the entry reads as a miss.
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create an entry expiring at `expires_at`.
    pub fn new(key: impl Into<String>, value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            expires_at,
        }
    }

    /// An entry is expired once `now` reaches `expires_at`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Payload cached per scope key: the ordered tag ids and when they were computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedTagOrder {
    /// Tag ids, most recently updated first.
    pub tag_ids: Vec<i64>,
    /// When the ordering was computed.
    pub computed_at: DateTime<Utc>,
}

impl CachedTagOrder {
    /// Create a payload.
    pub fn new(tag_ids: Vec<i64>, computed_at: DateTime<Utc>) -> Self {
        Self {
            tag_ids,
            computed_at,
        }
    }
}
