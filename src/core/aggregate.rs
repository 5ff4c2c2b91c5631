//! Holder aggregation.

use crate::core::models::HolderRecord;
use std::collections::HashMap;
use std::hash::Hash;

/// Counts how many items map to each key.
///
/// The returned map has one entry per distinct key and its values sum to the number
/// of input items. Iteration order of the map is unspecified.
pub fn count_by_key<I, K, F>(items: I, mut key_fn: F) -> HashMap<K, usize>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(key_fn(&item)).or_insert(0) += 1;
    }
    counts
}

/// Sums pre-counted holdings per key, for sources that already report
/// `(owner, amount)` pairs and may list an owner more than once.
pub fn sum_by_key<K, I>(pairs: I) -> HashMap<K, usize>
where
    I: IntoIterator<Item = (K, usize)>,
    K: Eq + Hash,
{
    let mut totals = HashMap::new();
    for (key, amount) in pairs {
        *totals.entry(key).or_insert(0) += amount;
    }
    totals
}

/// Converts address counts into holder records, most items first, ties broken by
/// address so the CSV output is deterministic. Zero counts are dropped.
#[must_use]
pub fn holders_from_counts(counts: HashMap<String, usize>) -> Vec<HolderRecord> {
    let mut holders: Vec<HolderRecord> = counts
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(address, item_count)| HolderRecord {
            address,
            item_count,
        })
        .collect();

    holders.sort_by(|a, b| {
        b.item_count
            .cmp(&a.item_count)
            .then_with(|| a.address.cmp(&b.address))
    });
    holders
}
