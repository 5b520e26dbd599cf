//! In-memory caching layer.
//!
//! Uses `moka` for TTL-based concurrent caching. Lives only as long as the
//! process; use the SQLite cache store when entries must survive restarts.

pub mod moka_cache_store;

pub use moka_cache_store::MokaCacheStore;
