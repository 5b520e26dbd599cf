pub mod tag_freshness_index;

pub use tag_freshness_index::{
    rank_by_freshness, IndexSettings, OrderSource, OrderedTags, TagFreshnessIndex,
    DEFAULT_KEY_PREFIX, DEFAULT_TAG_LIMIT, DEFAULT_TTL,
};
