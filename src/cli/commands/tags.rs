//! Implementation of the `tagfresh tags` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::display::{list_table, output, render_list, CommandOutput};
use crate::cli::runtime::{build_index, open_content_pool};
use crate::domain::models::{Config, Tag};
use crate::services::{OrderSource, OrderedTags};

/// Print tags for a scope, most recently updated first
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Scope key of the page or view; each scope is cached separately
    pub scope: String,
}

/// One tag row.
#[derive(Debug, Serialize)]
pub struct TagOutput {
    /// Tag id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Archive link.
    pub permalink: String,
}

impl From<&Tag> for TagOutput {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
            permalink: tag.permalink.clone(),
        }
    }
}

/// Output of `tagfresh tags`.
#[derive(Debug, Serialize)]
pub struct TagListOutput {
    /// Requested scope key.
    pub scope: String,
    /// Where the ordering came from.
    pub source: OrderSource,
    /// Number of tags.
    pub total: usize,
    /// Tags in order.
    pub tags: Vec<TagOutput>,
}

impl TagListOutput {
    /// Build from an index result.
    pub fn new(scope: impl Into<String>, ordered: &OrderedTags) -> Self {
        Self {
            scope: scope.into(),
            source: ordered.source,
            total: ordered.tags.len(),
            tags: ordered.tags.iter().map(TagOutput::from).collect(),
        }
    }
}

impl CommandOutput for TagListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["#", "name", "permalink"]);
        for (position, tag) in self.tags.iter().enumerate() {
            table.add_row(vec![
                (position + 1).to_string(),
                tag.name.clone(),
                tag.permalink.clone(),
            ]);
        }

        format!(
            "{}\n\nscope: {} (from {})",
            render_list("tag", &table, self.total),
            self.scope,
            self.source.as_str()
        )
    }
}

/// Run `tagfresh tags`.
pub async fn execute(args: TagsArgs, config: &Config, json_mode: bool) -> Result<()> {
    let pool = open_content_pool(config).await?;
    let index = build_index(config, &pool)?;

    let ordered = index.ordered_tags(&args.scope).await;
    output(&TagListOutput::new(args.scope, &ordered), json_mode);

    Ok(())
}
