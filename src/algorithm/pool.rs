//! Owned tile pools consumed during assembly

use log::info;
use std::collections::BTreeMap;

use crate::algorithm::fingerprints::{FingerprintHistogram, TileClass};
use crate::io::error::{Result, consistency_error};
use crate::spatial::tiles::{Tile, TileId};

/// Set of unplaced tiles, indexed and iterated by id
#[derive(Debug, Clone, Default)]
pub struct TilePool {
    tiles: BTreeMap<TileId, Tile>,
}

impl TilePool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile, replacing any tile with the same id
    pub fn insert(&mut self, tile: Tile) {
        self.tiles.insert(tile.id(), tile);
    }

    /// Remove a tile by id
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        self.tiles.remove(&id)
    }

    /// Remove the tile with the smallest id
    pub fn pop_first(&mut self) -> Option<Tile> {
        self.tiles.pop_first().map(|(_, tile)| tile)
    }

    /// Iterate tiles in id order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Ids of the remaining tiles in ascending order
    pub fn ids(&self) -> Vec<TileId> {
        self.tiles.keys().copied().collect()
    }

    /// Number of remaining tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test if the pool is exhausted
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl FromIterator<Tile> for TilePool {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut pool = Self::new();
        for tile in iter {
            pool.insert(tile);
        }
        pool
    }
}

/// Unplaced tiles split by position class
#[derive(Debug, Clone, Default)]
pub struct TilePools {
    /// Tiles with two border edges
    pub corners: TilePool,
    /// Tiles with one border edge
    pub edges: TilePool,
    /// Tiles with no border edge
    pub interiors: TilePool,
}

impl TilePools {
    /// Classify every tile once and sort it into its pool
    ///
    /// # Errors
    ///
    /// Returns a consistency error if any tile has an invalid number of
    /// unique edges or the pool sizes do not fit a
    /// `side` x `side` layout
    pub fn classify(tiles: &[Tile], histogram: &FingerprintHistogram, side: usize) -> Result<Self> {
        let mut pools = Self::default();
        for tile in tiles {
            pools.pool_mut(histogram.classify(tile)?).insert(tile.clone());
        }

        info!(
            "Classified {} corner, {} edge, {} interior tiles",
            pools.corners.len(),
            pools.edges.len(),
            pools.interiors.len()
        );

        let inner = side.saturating_sub(2);
        let expected = (4, 4 * inner, inner * inner);
        let actual = (pools.corners.len(), pools.edges.len(), pools.interiors.len());
        if expected != actual {
            return Err(consistency_error(&format!(
                "a {side}x{side} layout needs {expected:?} corner/edge/interior tiles, found {actual:?}"
            )));
        }
        Ok(pools)
    }

    /// Pool holding tiles of the given class
    pub fn pool_mut(&mut self, class: TileClass) -> &mut TilePool {
        match class {
            TileClass::Corner => &mut self.corners,
            TileClass::Edge => &mut self.edges,
            TileClass::Interior => &mut self.interiors,
        }
    }

    /// Total number of unplaced tiles
    pub fn len(&self) -> usize {
        self.corners.len() + self.edges.len() + self.interiors.len()
    }

    /// Test if every pool is exhausted
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
