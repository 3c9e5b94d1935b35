use bitvec::prelude::*;
use std::fmt;

use crate::spatial::Position;

/// Fixed-size bitset of grid cells
///
/// Cells are addressed row-major (`row * cols + col`), giving O(1)
/// membership tests for path lookups during rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBitset {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl CellBitset {
    /// Create a bitset with no cells present
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a bitset containing every listed position
    ///
    /// Positions outside the grid are ignored.
    pub fn from_positions(rows: usize, cols: usize, positions: &[Position]) -> Self {
        let mut bitset = Self::new(rows, cols);
        for &position in positions {
            bitset.insert(position);
        }
        bitset
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        let [row, col] = position;
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Insert a cell position
    pub fn insert(&mut self, position: Position) {
        if let Some(index) = self.index_of(position) {
            self.bits.set(index, true);
        }
    }

    /// Test cell membership
    pub fn contains(&self, position: Position) -> bool {
        self.index_of(position)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Remove every cell
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all member positions in row-major order
    pub fn to_vec(&self) -> Vec<Position> {
        self.bits
            .iter_ones()
            .map(|index| [index / self.cols, index % self.cols])
            .collect()
    }
}

impl fmt::Display for CellBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellBitset({} cells: {:?})", self.count(), self.to_vec())
    }
}
