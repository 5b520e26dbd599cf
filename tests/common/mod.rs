//! Common test utilities for integration tests
//!
//! Seeds an in-memory content database and builds indexes over it.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use tagfresh::adapters::sqlite::{create_migrated_test_pool, SqliteCacheStore, SqliteContentStore};
use tagfresh::domain::ports::ManualClock;
use tagfresh::{IndexSettings, TagFreshnessIndex};

pub type SqliteIndex = TagFreshnessIndex<SqliteContentStore, SqliteCacheStore>;

/// Migrated in-memory database
pub async fn test_pool() -> SqlitePool {
    create_migrated_test_pool()
        .await
        .expect("Failed to create test database")
}

/// Clock fixed at 2024-07-01 00:00:00 UTC
pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()))
}

pub async fn insert_tag(pool: &SqlitePool, id: i64, name: &str) {
    sqlx::query("INSERT INTO tags (id, name, slug, permalink) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(name.to_lowercase())
        .bind(format!("https://blog.example/tag/{}", name.to_lowercase()))
        .execute(pool)
        .await
        .expect("Failed to insert tag");
}

pub async fn insert_post(pool: &SqlitePool, id: i64, post_date: &str, tag_ids: &[i64]) {
    sqlx::query("INSERT INTO posts (id, title, post_date) VALUES (?, ?, ?)")
        .bind(id)
        .bind(format!("post {id}"))
        .bind(post_date)
        .execute(pool)
        .await
        .expect("Failed to insert post");

    for tag_id in tag_ids {
        sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES (?, ?)")
            .bind(id)
            .bind(*tag_id)
            .execute(pool)
            .await
            .expect("Failed to link post to tag");
    }
}

/// Index over SQLite content and cache stores sharing one clock
pub fn sqlite_index(pool: &SqlitePool, clock: Arc<ManualClock>) -> SqliteIndex {
    TagFreshnessIndex::with_clock(
        Arc::new(SqliteContentStore::new(pool.clone())),
        Arc::new(SqliteCacheStore::with_clock(pool.clone(), clock.clone())),
        IndexSettings::default(),
        clock,
    )
}

pub fn names(tags: &[tagfresh::Tag]) -> Vec<&str> {
    tags.iter().map(|t| t.name.as_str()).collect()
}
