//! Incremental diff of a fresh fetch against the previous snapshot.

use crate::models::{ArticleRecord, DedupKey, DedupMode};
use std::collections::BTreeSet;

/// Outcome of comparing one source's fetch with its snapshot entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diff {
    /// Records not seen before, in fetch order.
    pub new_records: Vec<ArticleRecord>,
    /// Keys of everything in the fetch. Replaces the snapshot entry as a whole,
    /// so articles gone from the page drop out.
    pub updated_keys: BTreeSet<DedupKey>,
}

/// Compare a fresh fetch with the keys recorded for the same source.
///
/// # Arguments
/// * `current` - records as extracted, in page order
/// * `previous` - the source's snapshot entry
/// * `mode` - how records are keyed (`Dated` or `Undated`)
///
/// # Returns
/// A [`Diff`] whose `new_records` keep page order. A record repeated within
/// `current` is reported once.
pub fn diff(current: &[ArticleRecord], previous: &BTreeSet<DedupKey>, mode: DedupMode) -> Diff {
    let mut result = Diff::default();
    for record in current {
        let key = record.dedup_key(mode);
        if !previous.contains(&key) && !result.updated_keys.contains(&key) {
            result.new_records.push(record.clone());
        }
        result.updated_keys.insert(key);
    }
    result
}
