use proptest::prelude::*;
use tagfresh::{rank_by_freshness, FreshnessEntry, Tag};

fn timestamp() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (2020u32..2025, 1u32..13, 1u32..29)
            .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02} 00:00:00")),
    ]
}

fn entries(timestamps: Vec<String>) -> Vec<FreshnessEntry> {
    timestamps
        .into_iter()
        .enumerate()
        .map(|(i, last_update)| FreshnessEntry {
            tag: Tag::new(i as i64, format!("tag{i}"), format!("/tag/{i}")),
            last_update,
        })
        .collect()
}

proptest! {
    /// Property: ranking only reorders, it never adds or drops tags
    #[test]
    fn prop_rank_is_a_permutation(timestamps in prop::collection::vec(timestamp(), 0..60)) {
        let input = entries(timestamps);
        let mut ranked_ids: Vec<i64> = rank_by_freshness(input.clone()).iter().map(|e| e.tag.id).collect();
        let mut input_ids: Vec<i64> = input.iter().map(|e| e.tag.id).collect();
        ranked_ids.sort_unstable();
        input_ids.sort_unstable();
        prop_assert_eq!(ranked_ids, input_ids);
    }

    /// Property: output is non-increasing by string comparison
    #[test]
    fn prop_rank_is_descending(timestamps in prop::collection::vec(timestamp(), 0..60)) {
        let ranked = rank_by_freshness(entries(timestamps));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].last_update >= pair[1].last_update);
        }
    }

    /// Property: tags without content come after every tag with content
    #[test]
    fn prop_empty_timestamps_sort_last(timestamps in prop::collection::vec(timestamp(), 0..60)) {
        let ranked = rank_by_freshness(entries(timestamps));
        if let Some(first_empty) = ranked.iter().position(|e| !e.has_content()) {
            prop_assert!(ranked[first_empty..].iter().all(|e| !e.has_content()));
        }
    }

    /// Property: equal timestamps keep their input order
    #[test]
    fn prop_ties_are_stable(timestamps in prop::collection::vec(timestamp(), 0..60)) {
        let ranked = rank_by_freshness(entries(timestamps));
        for pair in ranked.windows(2) {
            if pair[0].last_update == pair[1].last_update {
                prop_assert!(pair[0].tag.id < pair[1].tag.id);
            }
        }
    }
}
