use bitvec::prelude::*;

/// Fixed-size bitset marking cells of a picture
///
/// Cells are stored in row-major order, so marking the same cell from two
/// overlapping marker matches is naturally deduplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl CellMask {
    /// Create a mask with no cells marked
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Mark a cell; out-of-bounds cells are ignored
    pub fn insert(&mut self, row: usize, col: usize) {
        if row < self.rows && col < self.cols {
            self.bits.set(row * self.cols + col, true);
        }
    }

    /// Test whether a cell is marked
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows
            && col < self.cols
            && self.bits.get(row * self.cols + col).is_some_and(|bit| *bit)
    }

    /// Count marked cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}
