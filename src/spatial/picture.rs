//! The assembled, cropped image and its eight orientations

use ndarray::Array2;
use std::fmt;

use crate::spatial::transform::{self, Orientation};

/// Boolean image produced by stitching tile interiors together
///
/// Every transform returns a new picture; the orientation records how it
/// relates to the image as first assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    cells: Array2<bool>,
    orientation: Orientation,
}

impl Picture {
    /// Wrap an assembled grid
    pub const fn new(cells: Array2<bool>) -> Self {
        Self {
            cells,
            orientation: Orientation::IDENTITY,
        }
    }

    /// Cell grid in the current orientation
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Orientation relative to the assembled image
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the cell at `(row, col)` is set; out-of-bounds cells are unset
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(false)
    }

    /// Total number of set cells
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&set| set).count()
    }

    /// The picture turned 90° clockwise
    #[must_use]
    pub fn rotate_right(&self) -> Self {
        Self {
            cells: transform::rotate_right(&self.cells),
            orientation: self.orientation.rotated_right(),
        }
    }

    /// The picture reflected along its main diagonal
    #[must_use]
    pub fn flip(&self) -> Self {
        Self {
            cells: transform::transpose(&self.cells),
            orientation: self.orientation.flipped(),
        }
    }

    /// The assembled image re-expressed in an arbitrary orientation
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> Self {
        let base = if self.orientation == Orientation::IDENTITY {
            self.cells.clone()
        } else {
            self.undo_orientation()
        };
        Self {
            cells: transform::apply(&base, orientation),
            orientation,
        }
    }

    /// All eight orientations in scan order
    ///
    /// Three clockwise turns, one reflection, then three more turns.
    pub fn orientations(&self) -> Vec<Self> {
        let mut result = Vec::with_capacity(8);
        let mut current = self.clone();
        for step in 0..8 {
            let next = if step == 3 {
                current.flip()
            } else {
                current.rotate_right()
            };
            result.push(current);
            current = next;
        }
        result
    }

    fn undo_orientation(&self) -> Array2<bool> {
        // Turning the remaining quarter-turns and reflecting again restores the original
        let mut cells = self.cells.clone();
        for _ in 0..(4 - self.orientation.quarter_turns()) % 4 {
            cells = transform::rotate_right(&cells);
        }
        if self.orientation.mirrored() {
            cells = transform::transpose(&cells);
        }
        cells
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row.iter().map(|&set| if set { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
