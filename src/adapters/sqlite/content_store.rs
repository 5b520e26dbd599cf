//! SQLite implementation of the ContentStore.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ContentItem, Tag};
use crate::domain::ports::ContentStore;

/// Bound parameters per `IN (...)` query when resolving tag ids.
const ID_CHUNK_SIZE: usize = 500;

/// Content store over the `tags`, `posts` and `post_tags` tables.
#[derive(Clone)]
pub struct SqliteContentStore {
    pool: SqlitePool,
}

impl SqliteContentStore {
    /// Create a store on a migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for SqliteContentStore {
    async fn list_tags(&self, limit: u32, include_empty: bool) -> DomainResult<Vec<Tag>> {
        let query = if include_empty {
            "SELECT id, name, slug, permalink FROM tags ORDER BY name ASC, id ASC LIMIT ?"
        } else {
            r#"SELECT t.id, t.name, t.slug, t.permalink FROM tags t
               WHERE EXISTS (SELECT 1 FROM post_tags pt WHERE pt.tag_id = t.id)
               ORDER BY t.name ASC, t.id ASC LIMIT ?"#
        };

        let rows: Vec<TagRow> = sqlx::query_as(query)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(content_error)?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn latest_content_for_tag(&self, tag_id: i64) -> DomainResult<Option<ContentItem>> {
        let row: Option<(i64, String)> = sqlx::query_as(
            r#"SELECT p.id, p.post_date FROM posts p
               JOIN post_tags pt ON pt.post_id = p.id
               WHERE pt.tag_id = ?
               ORDER BY p.post_date DESC, p.id DESC
               LIMIT 1"#
        )
        .bind(tag_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(content_error)?;

        let Some((post_id, post_date)) = row else {
            return Ok(None);
        };

        let tag_ids: Vec<(i64,)> = sqlx::query_as("SELECT tag_id FROM post_tags WHERE post_id = ? ORDER BY tag_id")
            .bind(post_id)
            .fetch_all(&self.pool)
            .await
            .map_err(content_error)?;

        Ok(Some(ContentItem::new(
            post_id,
            tag_ids.into_iter().map(|(id,)| id).collect(),
            post_date,
        )))
    }

    async fn tags_by_ids(&self, ids: &[i64]) -> DomainResult<Vec<Tag>> {
        let mut tags = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(ID_CHUNK_SIZE) {
            let placeholders = vec!["?"; chunk.len()].join(", ");
            let query = format!("SELECT id, name, slug, permalink FROM tags WHERE id IN ({placeholders})");

            let mut q = sqlx::query_as::<_, TagRow>(&query);
            for id in chunk {
                q = q.bind(*id);
            }

            let rows = q.fetch_all(&self.pool).await.map_err(content_error)?;
            tags.extend(rows.into_iter().map(Tag::from));
        }

        Ok(tags)
    }
}

fn content_error(err: sqlx::Error) -> DomainError {
    DomainError::ContentStore(err.to_string())
}

#[derive(sqlx::FromRow)]
struct TagRow {
    id: i64,
    name: String,
    slug: String,
    permalink: String,
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            permalink: row.permalink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::create_migrated_test_pool;

    async fn insert_tag(pool: &SqlitePool, id: i64, name: &str) {
        sqlx::query("INSERT INTO tags (id, name, slug, permalink) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(name.to_lowercase())
            .bind(format!("https://blog.example/tag/{}", name.to_lowercase()))
            .execute(pool)
            .await
            .unwrap();
    }

    async fn insert_post(pool: &SqlitePool, id: i64, post_date: &str, tag_ids: &[i64]) {
        sqlx::query("INSERT INTO posts (id, title, post_date) VALUES (?, ?, ?)")
            .bind(id)
            .bind(format!("post {id}"))
            .bind(post_date)
            .execute(pool)
            .await
            .unwrap();
        for tag_id in tag_ids {
            sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES (?, ?)")
                .bind(id)
                .bind(*tag_id)
                .execute(pool)
                .await
                .unwrap();
        }
    }

    async fn setup_test_store() -> (SqliteContentStore, SqlitePool) {
        let pool = create_migrated_test_pool().await.unwrap();
        insert_tag(&pool, 1, "Rust").await;
        insert_tag(&pool, 2, "Go").await;
        insert_tag(&pool, 3, "Zig").await;
        insert_post(&pool, 10, "2024-05-01 09:00:00", &[1, 2]).await;
        insert_post(&pool, 11, "2024-06-01 09:00:00", &[1]).await;
        (SqliteContentStore::new(pool.clone()), pool)
    }

    #[tokio::test]
    async fn test_list_tags_ordered_by_name() {
        let (store, _pool) = setup_test_store().await;

        let tags = store.list_tags(1000, true).await.unwrap();
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Rust", "Zig"]);
        assert_eq!(tags[1].permalink, "https://blog.example/tag/rust");
    }

    #[tokio::test]
    async fn test_list_tags_respects_limit() {
        let (store, _pool) = setup_test_store().await;

        let tags = store.list_tags(2, true).await.unwrap();
        assert_eq!(tags.len(), 2);
        assert!(!tags.iter().any(|t| t.name == "Zig"));
    }

    #[tokio::test]
    async fn test_list_tags_can_hide_empty() {
        let (store, _pool) = setup_test_store().await;

        let tags = store.list_tags(1000, false).await.unwrap();
        let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Go", "Rust"]);
    }

    #[tokio::test]
    async fn test_latest_content_for_tag() {
        let (store, _pool) = setup_test_store().await;

        let latest = store.latest_content_for_tag(1).await.unwrap().unwrap();
        assert_eq!(latest.id, 11);
        assert_eq!(latest.timestamp, "2024-06-01 09:00:00");
        assert_eq!(latest.tag_ids, vec![1]);

        let latest = store.latest_content_for_tag(2).await.unwrap().unwrap();
        assert_eq!(latest.id, 10);
        assert_eq!(latest.tag_ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_latest_content_for_empty_tag() {
        let (store, _pool) = setup_test_store().await;
        assert!(store.latest_content_for_tag(3).await.unwrap().is_none());
        assert!(store.latest_content_for_tag(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_latest_content_tie_breaks_on_post_id() {
        let (store, pool) = setup_test_store().await;
        insert_post(&pool, 12, "2024-06-01 09:00:00", &[1]).await;

        let latest = store.latest_content_for_tag(1).await.unwrap().unwrap();
        assert_eq!(latest.id, 12);
    }

    #[tokio::test]
    async fn test_tags_by_ids_skips_unknown() {
        let (store, _pool) = setup_test_store().await;

        let mut tags = store.tags_by_ids(&[3, 1, 99]).await.unwrap();
        tags.sort_by_key(|t| t.id);
        let ids: Vec<_> = tags.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(store.tags_by_ids(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_failures_are_content_store_errors() {
        let (store, pool) = setup_test_store().await;
        pool.close().await;

        assert!(matches!(
            store.list_tags(10, true).await,
            Err(DomainError::ContentStore(_))
        ));
        assert!(matches!(
            store.latest_content_for_tag(1).await,
            Err(DomainError::ContentStore(_))
        ));
        assert!(matches!(
            store.tags_by_ids(&[1]).await,
            Err(DomainError::ContentStore(_))
        ));
    }

    #[tokio::test]
    async fn test_tags_by_ids_across_chunks() {
        let pool = create_migrated_test_pool().await.unwrap();
        for id in 1..=1200 {
            insert_tag(&pool, id, &format!("tag{id}")).await;
        }
        let store = SqliteContentStore::new(pool);

        let ids: Vec<i64> = (1..=1200).collect();
        let tags = store.tags_by_ids(&ids).await.unwrap();
        assert_eq!(tags.len(), 1200);
    }
}
