//! Memoized distance queries.

use std::collections::HashMap;

use delve_core::Point;

use crate::bfs::{Pathfinder, SearchOutcome};
use crate::traits::Pather;

/// Memoizes `(start, goal)` distance queries against one grid snapshot.
///
/// Entries are written once and never invalidated; discard the cache (or
/// [`clear`](Self::clear) it) together with the grid and rules it was built
/// against. The ordered pair is the key: `(p, q)` and `(q, p)` are cached
/// independently.
#[derive(Debug, Default)]
pub struct DistanceCache {
    entries: HashMap<(Point, Point), SearchOutcome>,
    hits: u64,
    misses: u64,
}

impl DistanceCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached shortest distance from `from` to `to`.
    ///
    /// On a miss the distance is computed with `finder` over `pather` and
    /// stored before returning.
    pub fn distance<P: Pather>(
        &mut self,
        finder: &mut Pathfinder,
        pather: &P,
        from: Point,
        to: Point,
    ) -> SearchOutcome {
        if let Some(&cached) = self.entries.get(&(from, to)) {
            self.hits += 1;
            return cached;
        }
        let outcome = finder.distance(pather, from, to);
        self.entries.insert((from, to), outcome);
        self.misses += 1;
        outcome
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that computed a fresh distance.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries and counters, e.g. after the grid changed.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
