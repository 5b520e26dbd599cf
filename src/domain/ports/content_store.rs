//! Content store port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{ContentItem, Tag};

/// Read-only port onto the content store that owns tags and posts.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// List tags in the store's own order (by name), at most `limit` of them.
    ///
    /// When `include_empty` is false, tags with no content are left out.
    async fn list_tags(&self, limit: u32, include_empty: bool) -> DomainResult<Vec<Tag>>;

    /// Get the most recently created content item associated with a tag.
    async fn latest_content_for_tag(&self, tag_id: i64) -> DomainResult<Option<ContentItem>>;

    /// Resolve tag ids back to tags. Unknown ids are skipped; order is unspecified.
    async fn tags_by_ids(&self, ids: &[i64]) -> DomainResult<Vec<Tag>>;
}
