//! Square boolean tiles with identity, transforms, and edge fingerprints
//!
//! A tile is an immutable value: rotating or reflecting it produces a new
//! tile with the same id and an updated [`Orientation`]. Edges are reduced
//! to integer fingerprints so compatibility checks are a single comparison.

use ndarray::Array2;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::io::error::{Result, format_error};
use crate::spatial::transform::{Orientation, rotate_right, transpose};

/// Identifier parsed from a tile header
pub type TileId = u64;

/// Integer encoding of one edge, leftmost cell in the most significant bit
pub type Fingerprint = u64;

/// Widest tile whose edges still fit in a [`Fingerprint`]
pub const MAX_TILE_WIDTH: usize = Fingerprint::BITS as usize;

/// Narrowest tile that still has an interior after cropping its border
pub const MIN_TILE_WIDTH: usize = 3;

/// One side of a tile, in clockwise order starting from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Top row, read left to right
    Top,
    /// Right column, read top to bottom
    Right,
    /// Bottom row, read right to left
    Bottom,
    /// Left column, read bottom to top
    Left,
}

impl Edge {
    /// All edges in clockwise order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// Fingerprints of the four edges, in [`Edge::ALL`] order
///
/// Each edge is read clockwise around the tile, which is the same as
/// turning the tile until that edge is on top and reading the top row.
/// Two edges that touch in an assembled grid are therefore read in opposite
/// directions and match when one is the bit-reversal of the other.
pub type EdgeFingerprints = [Fingerprint; 4];

/// Reverse the low `width` bits of a fingerprint
pub const fn reverse_bits(fingerprint: Fingerprint, width: usize) -> Fingerprint {
    if width == 0 {
        return 0;
    }
    fingerprint.reverse_bits() >> (MAX_TILE_WIDTH - width)
}

fn read_bits(bits: impl Iterator<Item = bool>) -> Fingerprint {
    bits.fold(0, |fp, bit| (fp << 1) | Fingerprint::from(bit))
}

/// A square grid of cells with a stable identity
///
/// Equality and hashing use the id only: a turned or reflected tile is
/// still the same physical tile. Compare [`Tile::cells`] to compare content.
#[derive(Debug, Clone)]
pub struct Tile {
    id: TileId,
    cells: Array2<bool>,
    orientation: Orientation,
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Tile {
    /// Create a tile from an already square grid
    ///
    /// # Errors
    ///
    /// Returns a format error if the grid is not square or its side is
    /// outside `MIN_TILE_WIDTH..=MAX_TILE_WIDTH`
    pub fn new(id: TileId, cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols {
            return Err(format_error(
                0,
                &format!("tile {id} is {rows}x{cols}, expected a square"),
            ));
        }
        if !(MIN_TILE_WIDTH..=MAX_TILE_WIDTH).contains(&rows) {
            return Err(format_error(
                0,
                &format!(
                    "tile {id} has side {rows}, expected {MIN_TILE_WIDTH}..={MAX_TILE_WIDTH}"
                ),
            ));
        }
        Ok(Self {
            id,
            cells,
            orientation: Orientation::IDENTITY,
        })
    }

    /// Parse a header line `Tile <id>:` followed by `width` rows of `#`/`.`
    ///
    /// `block` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns a format error if the line count is not `width + 1`, the
    /// header is not `Tile <integer>:`, a row is not exactly `width` cells
    /// long, or a cell is neither `#` nor `.`
    pub fn parse(lines: &[&str], width: usize, block: usize) -> Result<Self> {
        let Some((header, rows)) = lines.split_first() else {
            return Err(format_error(block, &"empty tile block"));
        };

        if rows.len() != width {
            return Err(format_error(
                block,
                &format!("expected {width} rows, found {}", rows.len()),
            ));
        }

        let id = header
            .trim()
            .strip_prefix("Tile ")
            .and_then(|rest| rest.strip_suffix(':'))
            .and_then(|number| number.trim().parse::<TileId>().ok())
            .ok_or_else(|| format_error(block, &format!("bad tile header '{}'", header.trim())))?;

        let mut cells = Vec::with_capacity(width * width);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.trim();
            if row.chars().count() != width {
                return Err(format_error(
                    block,
                    &format!(
                        "tile {id} row {} has {} cells, expected {width}",
                        row_index + 1,
                        row.chars().count()
                    ),
                ));
            }
            for cell in row.chars() {
                match cell {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    other => {
                        return Err(format_error(
                            block,
                            &format!("tile {id} contains unexpected cell '{other}'"),
                        ));
                    }
                }
            }
        }

        let cells = Array2::from_shape_vec((width, width), cells)
            .map_err(|e| format_error(block, &e))?;
        Self::new(id, cells)
    }

    /// Tile identifier, preserved across every transform
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Side length in cells
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    /// Current cell grid
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Transform that maps the parsed grid onto [`Tile::cells`]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The same tile turned 90° clockwise
    #[must_use]
    pub fn rotate_right(&self) -> Self {
        Self {
            id: self.id,
            cells: rotate_right(&self.cells),
            orientation: self.orientation.rotated_right(),
        }
    }

    /// The same tile reflected along its main diagonal
    #[must_use]
    pub fn flip(&self) -> Self {
        Self {
            id: self.id,
            cells: transpose(&self.cells),
            orientation: self.orientation.flipped(),
        }
    }

    /// Fingerprint of a single edge
    pub fn fingerprint(&self, edge: Edge) -> Fingerprint {
        let last = self.width().saturating_sub(1);
        let cells = self.cells.view();
        match edge {
            Edge::Top => read_bits(cells.row(0).iter().copied()),
            Edge::Right => read_bits(cells.column(last).iter().copied()),
            Edge::Bottom => read_bits(cells.row(last).iter().rev().copied()),
            Edge::Left => read_bits(cells.column(0).iter().rev().copied()),
        }
    }

    /// Fingerprints of all four edges, clockwise from the top
    pub fn edge_fingerprints(&self) -> EdgeFingerprints {
        Edge::ALL.map(|edge| self.fingerprint(edge))
    }

    /// Copy of the grid with the outermost ring of cells removed
    pub fn interior(&self) -> Array2<bool> {
        let inner = self.width().saturating_sub(2);
        Array2::from_shape_fn((inner, inner), |(row, col)| {
            self.cells.get((row + 1, col + 1)).copied().unwrap_or(false)
        })
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tile {} ({})", self.id, self.orientation)?;
        for row in self.cells.rows() {
            let line: String = row.iter().map(|&set| if set { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
