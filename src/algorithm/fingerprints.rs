//! Edge fingerprint histogram and tile classification
//!
//! Every tile contributes the fingerprints of its four edges and of its
//! reflected self, so an edge pattern and its reversal are both counted.
//! An edge that sits on the outside of the finished grid is seen exactly
//! once; an edge shared with a neighbour is seen twice (once from each
//! side). The number of once-seen edges tells a tile's position class.

use std::collections::HashMap;
use std::fmt;

use crate::io::error::{Result, consistency_error};
use crate::spatial::tiles::{EdgeFingerprints, Fingerprint, Tile, TileId};

/// Position class of a tile in the finished grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// Two edges on the outer border
    Corner,
    /// One edge on the outer border
    Edge,
    /// No edge on the outer border
    Interior,
}

impl fmt::Display for TileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corner => write!(f, "corner"),
            Self::Edge => write!(f, "edge"),
            Self::Interior => write!(f, "interior"),
        }
    }
}

/// Count of every edge fingerprint across all tiles and their reflections
#[derive(Debug, Clone, Default)]
pub struct FingerprintHistogram {
    counts: HashMap<Fingerprint, usize>,
}

impl FingerprintHistogram {
    /// Build the histogram from all eight edge readings of every tile
    pub fn build(tiles: &[Tile]) -> Self {
        let mut counts = HashMap::new();
        for tile in tiles {
            let readings = tile
                .edge_fingerprints()
                .into_iter()
                .chain(tile.flip().edge_fingerprints());
            for fingerprint in readings {
                *counts.entry(fingerprint).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Number of times a fingerprint was seen
    pub fn count(&self, fingerprint: Fingerprint) -> usize {
        self.counts.get(&fingerprint).copied().unwrap_or(0)
    }

    /// Number of distinct fingerprints
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Which of a set of edge fingerprints are seen exactly once
    pub fn unique_edges(&self, fingerprints: &EdgeFingerprints) -> [bool; 4] {
        fingerprints.map(|fingerprint| self.count(fingerprint) == 1)
    }

    /// Classify a tile by how many of its edges are globally unique
    ///
    /// # Errors
    ///
    /// Returns a consistency error if three or more edges are unique, which
    /// no tile of a square layout with side at least two can have
    pub fn classify(&self, tile: &Tile) -> Result<TileClass> {
        let unique = self
            .unique_edges(&tile.edge_fingerprints())
            .iter()
            .filter(|&&is_unique| is_unique)
            .count();
        match unique {
            0 => Ok(TileClass::Interior),
            1 => Ok(TileClass::Edge),
            2 => Ok(TileClass::Corner),
            _ => Err(consistency_error(&format!(
                "tile {} has {unique} unmatched edges",
                tile.id()
            ))),
        }
    }
}

/// Product of a set of tile ids
///
/// # Errors
///
/// Returns a consistency error if the product does not fit in a [`TileId`]
pub fn id_product(ids: impl IntoIterator<Item = TileId>) -> Result<TileId> {
    ids.into_iter().try_fold(1, |product: TileId, id| {
        product
            .checked_mul(id)
            .ok_or_else(|| consistency_error(&"corner id product overflows"))
    })
}
