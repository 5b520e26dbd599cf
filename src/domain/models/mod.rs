pub mod cache;
pub mod config;
pub mod tag;

pub use cache::{CacheEntry, CachedTagOrder};
pub use config::{CacheConfig, Config, DatabaseConfig, IndexConfig, LoggingConfig};
pub use tag::{ContentItem, FreshnessEntry, Tag};
