use super::counter::FrequencyMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub phrase: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(phrase: impl Into<String>, count: usize) -> Self {
        Self {
            phrase: phrase.into(),
            count,
        }
    }
}

/// Count descending, then phrase ascending (byte order) so equal counts
/// always come out in the same order.
pub fn rank_order(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.phrase.cmp(&b.phrase))
}

/// Top `k` phrases of `counts` under [`rank_order`].
pub fn rank(counts: &FrequencyMap, k: usize) -> Vec<RankedEntry> {
    if k == 0 {
        return Vec::new();
    }

    let mut entries: Vec<RankedEntry> = counts
        .iter()
        .map(|(phrase, &count)| RankedEntry::new(phrase.as_str(), count))
        .collect();

    if k < entries.len() {
        entries.select_nth_unstable_by(k - 1, rank_order);
        entries.truncate(k);
    }
    entries.sort_unstable_by(rank_order);
    entries
}
