//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that infrastructure adapters must implement:
//! - ContentStore: read access to tags and their latest content
//! - CacheStore: TTL key-value storage for computed orderings
//! - Clock: time source for expiry decisions
//!
//! These traits keep the freshness index independent of the CMS storage and
//! of the concrete cache backend.

pub mod cache_store;
pub mod clock;
pub mod content_store;
pub mod null_cache;

pub use cache_store::CacheStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use content_store::ContentStore;
pub use null_cache::NullCacheStore;
