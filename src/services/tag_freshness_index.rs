//! Tag freshness index.
//!
//! Orders tags by the timestamp of their most recent content item, newest
//! first, and caches the resulting tag-id list per scope key for a fixed TTL.
//!
//! Timestamps are compared as strings, byte by byte. This is only a correct
//! chronological order when every timestamp uses the same fixed-width,
//! most-significant-first format (`YYYY-MM-DD HH:MM:SS`, ISO-8601). Tags with
//! no content carry an empty timestamp and therefore sort last.
//!
//! Concurrent misses on the same scope key are not coalesced: each one scans
//! the content store and writes an equivalent value back to the cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::{CachedTagOrder, Config, FreshnessEntry, Tag};
use crate::domain::ports::{CacheStore, Clock, ContentStore, SystemClock};

/// Maximum number of tags scanned per recompute. Tags past it are excluded.
pub const DEFAULT_TAG_LIMIT: u32 = 1000;

/// Lifetime of a cached ordering.
pub const DEFAULT_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Prefix joined with the scope key to build the cache key.
pub const DEFAULT_KEY_PREFIX: &str = "tags_by_update_";

/// Tunables for [`TagFreshnessIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSettings {
    /// How long a computed ordering stays cached.
    pub ttl: Duration,
    /// Maximum number of tags listed per recompute.
    pub tag_limit: u32,
    /// Prepended to the scope key to form the cache key.
    pub key_prefix: String,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            tag_limit: DEFAULT_TAG_LIMIT,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl From<&Config> for IndexSettings {
    fn from(config: &Config) -> Self {
        Self {
            ttl: Duration::from_secs(config.cache.ttl_secs),
            tag_limit: config.index.tag_limit,
            key_prefix: config.cache.key_prefix.clone(),
        }
    }
}

/// Where an ordering came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSource {
    /// Served from an unexpired cache entry.
    Cache,
    /// Recomputed from the content store and written back to the cache.
    Computed,
    /// Recomputed with content-store failures; not cached.
    Degraded,
}

impl OrderSource {
    /// Lowercase name, as shown by the CLI and used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Computed => "computed",
            Self::Degraded => "degraded",
        }
    }
}

/// Result of [`TagFreshnessIndex::ordered_tags`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTags {
    /// Tags, most recently updated first.
    pub tags: Vec<Tag>,
    /// Whether the ordering was cached, freshly computed or degraded.
    pub source: OrderSource,
}

impl OrderedTags {
    fn degraded(tags: Vec<Tag>) -> Self {
        Self {
            tags,
            source: OrderSource::Degraded,
        }
    }
}

/// Sort entries by `last_update`, descending, using plain string comparison.
///
/// The sort is stable: entries with equal timestamps (including several
/// empty ones) keep their input order.
pub fn rank_by_freshness(mut entries: Vec<FreshnessEntry>) -> Vec<FreshnessEntry> {
    entries.sort_by(|a, b| b.last_update.cmp(&a.last_update));
    entries
}

/// Computes and caches tag orderings by freshness.
pub struct TagFreshnessIndex<C: ContentStore + ?Sized, S: CacheStore + ?Sized> {
    content: Arc<C>,
    cache: Arc<S>,
    clock: Arc<dyn Clock>,
    settings: IndexSettings,
}

impl<C: ContentStore + ?Sized, S: CacheStore + ?Sized> TagFreshnessIndex<C, S> {
    /// Create an index that stamps cached orderings with the system clock.
    pub fn new(content: Arc<C>, cache: Arc<S>, settings: IndexSettings) -> Self {
        Self::with_clock(content, cache, settings, Arc::new(SystemClock))
    }

    /// Create an index with an injected clock, used to stamp cached orderings.
    pub fn with_clock(
        content: Arc<C>,
        cache: Arc<S>,
        settings: IndexSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            content,
            cache,
            clock,
            settings,
        }
    }

    /// Settings the index was built with.
    pub fn settings(&self) -> &IndexSettings {
        &self.settings
    }

    /// Cache key for a scope.
    pub fn cache_key(&self, scope_key: &str) -> String {
        format!("{}{}", self.settings.key_prefix, scope_key)
    }

    /// Get tags for `scope_key`, most recently updated first.
    ///
    /// Serves an unexpired cache entry when there is one, otherwise scans the
    /// content store and caches the new ordering. Never fails: store errors
    /// degrade to an empty or uncached result.
    #[instrument(skip(self), fields(key = %self.cache_key(scope_key)))]
    pub async fn ordered_tags(&self, scope_key: &str) -> OrderedTags {
        let key = self.cache_key(scope_key);

        if let Some(tags) = self.read_cached(&key).await {
            return OrderedTags {
                tags,
                source: OrderSource::Cache,
            };
        }

        self.recompute(&key).await
    }

    /// Drop the cached ordering for a scope.
    ///
    /// Returns whether an entry was removed. Cache-store errors are returned
    /// as-is, since this is an explicit operator action.
    pub async fn clear(&self, scope_key: &str) -> DomainResult<bool> {
        self.cache.delete(&self.cache_key(scope_key)).await
    }

    async fn read_cached(&self, key: &str) -> Option<Vec<Tag>> {
        let raw = match self.cache.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("cache miss");
                return None;
            }
            Err(err) => {
                warn!(error = %err, "cache read failed, recomputing");
                return None;
            }
        };

        let order: CachedTagOrder = match serde_json::from_str(&raw) {
            Ok(order) => order,
            Err(err) => {
                warn!(error = %err, "discarding unreadable cache entry");
                return None;
            }
        };

        match self.content.tags_by_ids(&order.tag_ids).await {
            Ok(tags) => {
                let tags = restore_order(&order.tag_ids, tags);
                debug!(tags = tags.len(), computed_at = %order.computed_at, "cache hit");
                Some(tags)
            }
            Err(err) => {
                warn!(error = %err, "failed to resolve cached tag ids, recomputing");
                None
            }
        }
    }

    async fn recompute(&self, key: &str) -> OrderedTags {
        let started = Instant::now();

        let mut tags = match self.content.list_tags(self.settings.tag_limit, true).await {
            Ok(tags) => tags,
            Err(err) => {
                warn!(error = %err, "failed to list tags, returning no tags");
                return OrderedTags::degraded(Vec::new());
            }
        };
        tags.truncate(self.settings.tag_limit as usize);

        let mut complete = true;
        let mut entries = Vec::with_capacity(tags.len());
        for tag in tags {
            let latest = match self.content.latest_content_for_tag(tag.id).await {
                Ok(latest) => latest,
                Err(err) => {
                    warn!(tag_id = tag.id, error = %err, "failed to read latest content, treating tag as empty");
                    complete = false;
                    None
                }
            };
            entries.push(FreshnessEntry::new(tag, latest.as_ref()));
        }

        let tags: Vec<Tag> = rank_by_freshness(entries)
            .into_iter()
            .map(|entry| entry.tag)
            .collect();

        if !complete {
            return OrderedTags::degraded(tags);
        }

        self.store(key, &tags).await;

        info!(
            tags = tags.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "recomputed tag freshness order"
        );

        OrderedTags {
            tags,
            source: OrderSource::Computed,
        }
    }

    async fn store(&self, key: &str, tags: &[Tag]) {
        let order = CachedTagOrder::new(tags.iter().map(|tag| tag.id).collect(), self.clock.now());
        let value = match serde_json::to_string(&order) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "failed to serialize tag order");
                return;
            }
        };

        if let Err(err) = self.cache.set(key, value, self.settings.ttl).await {
            warn!(error = %err, "cache write failed, serving uncached result");
        }
    }
}

/// Reorder resolved tags to match `ids`, skipping ids that did not resolve.
fn restore_order(ids: &[i64], tags: Vec<Tag>) -> Vec<Tag> {
    let mut by_id: HashMap<i64, Tag> = tags.into_iter().map(|tag| (tag.id, tag)).collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}
