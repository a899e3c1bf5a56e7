use std::collections::HashMap;

use crate::spatial::tiles::{EdgeFingerprints, Tile, TileId};
use crate::spatial::transform::Orientation;

/// Key identifying one orientation of one physical tile
///
/// Two tile values with the same key always have identical cells, so their
/// edge fingerprints can be shared.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct OrientationKey {
    id: TileId,
    orientation: Orientation,
}

impl OrientationKey {
    /// Key for the tile's current orientation
    pub const fn of(tile: &Tile) -> Self {
        Self {
            id: tile.id(),
            orientation: tile.orientation(),
        }
    }
}

/// Memoization cache for edge fingerprints
///
/// Assembly re-reads the edges of every remaining pool tile (and its
/// reflection) for each placement, so most lookups repeat.
#[derive(Default)]
pub struct FingerprintCache {
    fingerprints: HashMap<OrientationKey, EdgeFingerprints>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl FingerprintCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge fingerprints of a tile in its current orientation
    pub fn fingerprints(&mut self, tile: &Tile) -> EdgeFingerprints {
        use std::collections::hash_map::Entry;

        match self.fingerprints.entry(OrientationKey::of(tile)) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                *entry.get()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                *entry.insert(tile.edge_fingerprints())
            }
        }
    }

    /// Number of cached orientations
    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    /// Test if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}
