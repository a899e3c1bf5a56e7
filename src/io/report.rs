//! Printable summary of a solved puzzle

use std::fmt;

use crate::algorithm::scanner::OrientationScan;
use crate::io::configuration::{MATCHES_LABEL, ROUGHNESS_LABEL};
use crate::spatial::picture::Picture;
use crate::spatial::tiles::TileId;
use crate::spatial::transform::Orientation;

/// Match count and roughness for one orientation with matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationReport {
    /// Orientation relative to the assembled picture
    pub orientation: Orientation,
    /// Number of marker matches
    pub matches: usize,
    /// Set cells outside every match
    pub roughness: usize,
}

impl From<&OrientationScan> for OrientationReport {
    fn from(scan: &OrientationScan) -> Self {
        Self {
            orientation: scan.orientation,
            matches: scan.matches,
            roughness: scan.roughness,
        }
    }
}

/// Everything printed to standard output for one run
#[derive(Debug, Clone)]
pub struct Report {
    /// Product of the corner tile ids
    pub corner_product: TileId,
    /// Assembled picture in its original orientation
    pub picture: Picture,
    /// Orientations with at least one match, in scan order
    pub orientations: Vec<OrientationReport>,
}

impl Report {
    /// Build a report, keeping only orientations that found a marker
    pub fn new(corner_product: TileId, picture: Picture, scans: &[OrientationScan]) -> Self {
        let orientations = scans
            .iter()
            .filter(|scan| scan.has_matches())
            .map(OrientationReport::from)
            .collect();
        Self {
            corner_product,
            picture,
            orientations,
        }
    }

    /// Roughness of the first orientation with matches
    pub fn roughness(&self) -> Option<usize> {
        self.orientations.first().map(|found| found.roughness)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.corner_product)?;
        write!(f, "{}", self.picture)?;
        for found in &self.orientations {
            writeln!(f, "{MATCHES_LABEL}: {}", found.matches)?;
            writeln!(f, "{ROUGHNESS_LABEL}: {}", found.roughness)?;
        }
        Ok(())
    }
}
