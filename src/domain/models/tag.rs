//! Tag and content domain models.

use serde::{Deserialize, Serialize};

/// A content-categorization label.
///
/// The permalink is supplied by the content store and never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Identifier assigned by the content store.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// URL-safe form of the name.
    pub slug: String,
    /// Absolute link to the tag's archive page.
    pub permalink: String,
}

impl Tag {
    /// Create a tag, deriving the slug from the name.
    pub fn new(id: i64, name: impl Into<String>, permalink: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id,
            slug: slugify(&name),
            name,
            permalink: permalink.into(),
        }
    }

    /// Replace the derived slug with the store's own.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }
}

fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// A content item (post) belonging to one or more tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Identifier assigned by the content store.
    pub id: i64,
    /// Tags the item is filed under.
    pub tag_ids: Vec<i64>,
    /// Creation/update time in the store's own string representation,
    /// e.g. `2024-05-01 10:00:00`.
    pub timestamp: String,
}

impl ContentItem {
    /// Create a content item.
    pub fn new(id: i64, tag_ids: Vec<i64>, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            tag_ids,
            timestamp: timestamp.into(),
        }
    }
}

/// A tag paired with the timestamp of its most recent content item.
///
/// `last_update` is the empty string when the tag has no content, which
/// makes it sort after every non-empty timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreshnessEntry {
    /// The ranked tag.
    pub tag: Tag,
    /// Timestamp of the tag's newest content item, or empty.
    pub last_update: String,
}

impl FreshnessEntry {
    /// Pair a tag with its newest content item, if it has one.
    pub fn new(tag: Tag, latest: Option<&ContentItem>) -> Self {
        Self {
            tag,
            last_update: latest.map(|item| item.timestamp.clone()).unwrap_or_default(),
        }
    }

    /// Whether the tag has any content.
    pub fn has_content(&self) -> bool {
        !self.last_update.is_empty()
    }
}
