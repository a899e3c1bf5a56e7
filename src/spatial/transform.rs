//! Dihedral transforms over square boolean grids
//!
//! Tiles and the assembled picture share the same two primitive transforms:
//! a clockwise quarter-turn and a reflection along the main diagonal. Every
//! one of the eight symmetries of a square is reachable by composing them,
//! and [`Orientation`] records which one a transformed value is in.

use ndarray::{Array2, Axis};
use std::fmt;

/// One of the eight symmetries of a square relative to the parsed grid
///
/// Reads as "reflect first (if `mirrored`), then turn clockwise
/// `quarter_turns` times".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Orientation {
    quarter_turns: u8,
    mirrored: bool,
}

impl Orientation {
    /// The orientation of freshly parsed data
    pub const IDENTITY: Self = Self {
        quarter_turns: 0,
        mirrored: false,
    };

    /// Create an orientation, reducing the turn count modulo four
    pub const fn new(quarter_turns: u8, mirrored: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            mirrored,
        }
    }

    /// Clockwise quarter-turns applied after the optional reflection
    pub const fn quarter_turns(self) -> u8 {
        self.quarter_turns
    }

    /// Whether the grid has been reflected an odd number of times
    pub const fn mirrored(self) -> bool {
        self.mirrored
    }

    /// Orientation after one more clockwise quarter-turn
    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self::new(self.quarter_turns + 1, self.mirrored)
    }

    /// Orientation after one more diagonal reflection
    ///
    /// Reflecting a turned grid equals reflecting first and turning the
    /// other way, so the turn count is negated.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self::new(4 - self.quarter_turns, !self.mirrored)
    }

    /// Every orientation, in the order the picture scan visits them
    ///
    /// The scan turns three times, reflects, then turns three more times,
    /// so the mirrored half starts from the 270° state.
    pub fn scan_order() -> [Self; 8] {
        let mut order = [Self::IDENTITY; 8];
        let mut current = Self::IDENTITY;
        for (step, slot) in order.iter_mut().enumerate() {
            *slot = current;
            current = if step == 3 {
                current.flipped()
            } else {
                current.rotated_right()
            };
        }
        order
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", u16::from(self.quarter_turns) * 90)?;
        if self.mirrored {
            write!(f, " mirrored")?;
        }
        Ok(())
    }
}

/// Rotate a grid 90° clockwise
///
/// `rotated[y][x] = grid[rows - 1 - x][y]`, i.e. transpose then reverse
/// each row.
pub fn rotate_right<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    let mut rotated = grid.t().to_owned();
    rotated.invert_axis(Axis(1));
    rotated
}

/// Reflect a grid along its main diagonal (swap rows and columns)
pub fn transpose<T: Clone>(grid: &Array2<T>) -> Array2<T> {
    grid.t().to_owned()
}

/// Apply an orientation to a grid that is currently at [`Orientation::IDENTITY`]
pub fn apply<T: Clone>(grid: &Array2<T>, orientation: Orientation) -> Array2<T> {
    let mut result = if orientation.mirrored() {
        transpose(grid)
    } else {
        grid.clone()
    };
    for _ in 0..orientation.quarter_turns() {
        result = rotate_right(&result);
    }
    result
}
