//! Configuration models, loaded by the infrastructure config loader.

use serde::{Deserialize, Serialize};

/// Main configuration structure for tagfresh
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Freshness index configuration
    #[serde(default)]
    pub index: IndexConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to `SQLite` content database file
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    ".tagfresh/content.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Cache backend: `sqlite`, `memory` or `none`
    ///
    /// `memory` keeps entries in the running process only, so it is useful
    /// when the crate is embedded as a library. The CLI rejects it because
    /// every invocation would start with an empty cache.
    #[serde(default = "default_cache_backend")]
    pub backend: String,

    /// Time-to-live of a cached tag ordering, in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Prefix prepended to the scope key to form the cache key
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

fn default_cache_backend() -> String {
    "sqlite".to_string()
}

/// Six hours.
const fn default_ttl_secs() -> u64 {
    6 * 60 * 60
}

fn default_key_prefix() -> String {
    "tags_by_update_".to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_cache_backend(),
            ttl_secs: default_ttl_secs(),
            key_prefix: default_key_prefix(),
        }
    }
}

/// Freshness index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IndexConfig {
    /// Maximum number of tags scanned per recompute; tags beyond it are excluded
    #[serde(default = "default_tag_limit")]
    pub tag_limit: u32,
}

const fn default_tag_limit() -> u32 {
    1000
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            tag_limit: default_tag_limit(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<String>,

    /// Log file rotation: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
