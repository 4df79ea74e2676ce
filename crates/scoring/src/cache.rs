//! crates/scoring/src/cache.rs
//!
//! Content-addressed memoization of diff distances.

use std::sync::Arc;

use dashmap::DashMap;

/// Memoizes `(original, formatted)` text pairs to their diff distance.
///
/// Keys hash and compare by content, so two configurations that format a
/// file identically share one entry regardless of which `Arc` allocation
/// carries the text. Entries are never evicted within a search run; the
/// number of distinct pairs is bounded by corpus size times the distinct
/// formatter outputs explored. A host embedding the cache for longer than
/// one run is responsible for bounding it.
///
/// Concurrent lookups and inserts are safe; a racing recomputation of the
/// same pair writes the same value, so lost updates cannot skew scores.
#[derive(Debug, Default)]
pub struct DiffScoreCache {
    entries: DashMap<(Arc<str>, Arc<str>), u64>,
}

impl DiffScoreCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached distance for the pair, computing it on a miss.
    #[must_use]
    pub fn get_or_compute(&self, original: &Arc<str>, formatted: &Arc<str>) -> u64 {
        let key = (Arc::clone(original), Arc::clone(formatted));
        if let Some(hit) = self.entries.get(&key) {
            return *hit;
        }
        let computed = diff::distance(original, formatted);
        self.entries.insert(key, computed);
        computed
    }

    /// Number of distinct pairs scored so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been scored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
