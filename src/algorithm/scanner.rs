//! Marker-shape search over the assembled picture
//!
//! A marker is a fixed set of cell offsets that must all be set for a match
//! at an anchor. Anchors whose marker would leave the picture never match;
//! there is no wraparound. The picture is scanned in all eight orientations
//! since the assembled image has an arbitrary one.

use log::debug;

use crate::algorithm::bitset::CellMask;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::picture::Picture;
use crate::spatial::transform::Orientation;

/// Fixed pattern of cells searched for in the picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// (row, col) offsets from the anchor, row-major
    offsets: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Marker {
    /// Parse a marker drawing where `#` marks a required cell
    ///
    /// Every other character is ignored, so spaces can pad the drawing.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the drawing has no `#` cells
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let offsets: Vec<(usize, usize)> = lines
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .filter(|&(_, cell)| cell == '#')
                    .map(move |(col, _)| (row, col))
                    .collect::<Vec<_>>()
            })
            .collect();

        if offsets.is_empty() {
            let drawing = lines
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join("\\n");
            return Err(invalid_parameter(
                "marker",
                &drawing,
                &"marker shape has no '#' cells",
            ));
        }

        let height = offsets.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let width = offsets.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        Ok(Self {
            offsets,
            height,
            width,
        })
    }

    /// Required cells relative to the anchor
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Rows spanned by the marker
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the marker
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Cells the marker covers when anchored at `(row, col)`
    pub fn cells_at(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.offsets.iter().map(move |&(dr, dc)| (row + dr, col + dc))
    }

    /// Test whether every marker cell is set with the anchor at `(row, col)`
    pub fn matches_at(&self, picture: &Picture, row: usize, col: usize) -> bool {
        if row + self.height > picture.rows() || col + self.width > picture.cols() {
            return false;
        }
        self.cells_at(row, col).all(|(r, c)| picture.is_set(r, c))
    }
}

/// Outcome of scanning one orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Number of anchors where the marker matched
    pub matches: usize,
    /// Every cell covered by at least one match
    pub covered: CellMask,
}

/// Count marker matches at every anchor of the picture
pub fn count_matches(picture: &Picture, marker: &Marker) -> ScanResult {
    let mut covered = CellMask::new(picture.rows(), picture.cols());
    let mut matches = 0;
    for row in 0..picture.rows() {
        for col in 0..picture.cols() {
            if marker.matches_at(picture, row, col) {
                matches += 1;
                for (r, c) in marker.cells_at(row, col) {
                    covered.insert(r, c);
                }
            }
        }
    }
    ScanResult { matches, covered }
}

/// Set cells not covered by any marker match
pub fn roughness(picture: &Picture, covered: &CellMask) -> usize {
    picture.count_set().saturating_sub(covered.count())
}

/// Scan outcome for one orientation of the picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientationScan {
    /// Orientation relative to the assembled picture
    pub orientation: Orientation,
    /// Number of marker matches
    pub matches: usize,
    /// Set cells outside every match
    pub roughness: usize,
    /// Cells covered by matches, in this orientation's coordinates
    pub covered: CellMask,
}

impl OrientationScan {
    /// Whether any marker was found in this orientation
    pub const fn has_matches(&self) -> bool {
        self.matches > 0
    }
}

/// Scan all eight orientations in order
///
/// With `stop_at_first_match`, scanning ends after the first orientation
/// with a nonzero count.
pub fn scan_orientations(
    picture: &Picture,
    marker: &Marker,
    stop_at_first_match: bool,
) -> Vec<OrientationScan> {
    let mut scans = Vec::with_capacity(8);
    for oriented in picture.orientations() {
        let ScanResult { matches, covered } = count_matches(&oriented, marker);
        let scan = OrientationScan {
            orientation: oriented.orientation(),
            matches,
            roughness: roughness(&oriented, &covered),
            covered,
        };
        debug!(
            "Orientation {}: {} matches, roughness {}",
            scan.orientation, scan.matches, scan.roughness
        );
        let found = scan.has_matches();
        scans.push(scan);
        if found && stop_at_first_match {
            break;
        }
    }
    scans
}
