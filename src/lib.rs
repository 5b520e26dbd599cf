//! tagfresh - tags ordered by their most recently updated content
//!
//! The core is [`TagFreshnessIndex`]: given a scope key it returns every tag
//! (up to a cap) ordered by the timestamp of the tag's newest content item,
//! newest first, and caches the ordering per scope for a fixed TTL.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors and the storage ports
//! - **Service Layer** (`services`): the freshness index
//! - **Adapters** (`adapters`): SQLite content and cache stores, moka cache
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tagfresh::adapters::sqlite::{initialize_database, SqliteCacheStore, SqliteContentStore};
//! use tagfresh::{IndexSettings, TagFreshnessIndex};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = initialize_database("sqlite:.tagfresh/content.db", None).await?;
//!     let index = TagFreshnessIndex::new(
//!         Arc::new(SqliteContentStore::new(pool.clone())),
//!         Arc::new(SqliteCacheStore::new(pool)),
//!         IndexSettings::default(),
//!     );
//!     let ordered = index.ordered_tags("sidebar").await;
//!     println!("{} tags", ordered.tags.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::models::{Config, ContentItem, FreshnessEntry, Tag};
pub use domain::ports::{CacheStore, Clock, ContentStore};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::ConfigLoader;
pub use services::{rank_by_freshness, IndexSettings, OrderSource, OrderedTags, TagFreshnessIndex};
