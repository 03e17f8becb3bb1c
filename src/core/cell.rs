//! Board coordinates.
//!
//! Every position on the Gaps board is a `Cell`: a `(row, col)` pair with
//! `row` in `0..ROWS` and `col` in `0..cards_per_row`.
//!
//! ## Ordering
//!
//! Cells compare in row-major order (row first, then column). Every scan in
//! the engine walks the board in this order, so query results such as legal
//! destinations come back sorted the same way.
//!
//! ```
//! use gaps_engine::core::Cell;
//!
//! let a = Cell::new(0, 3);
//! let b = Cell::new(1, 0);
//! assert!(a < b);
//! assert_eq!(a.left(), Some(Cell::new(0, 2)));
//! assert_eq!(b.left(), None);
//! ```

use serde::{Deserialize, Serialize};

/// Number of rows on every Gaps board (one per suit).
pub const ROWS: usize = 4;

/// A board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Row index (0-based, top to bottom).
    pub row: usize,
    /// Column index (0-based, left to right).
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell immediately to the left, if any.
    #[must_use]
    pub const fn left(self) -> Option<Cell> {
        if self.col == 0 {
            None
        } else {
            Some(Cell::new(self.row, self.col - 1))
        }
    }

    /// The cell immediately to the right, bounded by `cards_per_row`.
    #[must_use]
    pub const fn right(self, cards_per_row: usize) -> Option<Cell> {
        if self.col + 1 >= cards_per_row {
            None
        } else {
            Some(Cell::new(self.row, self.col + 1))
        }
    }

    /// Is this the leftmost column?
    #[must_use]
    pub const fn is_leftmost(self) -> bool {
        self.col == 0
    }

    /// Row-major index into a board with `cards_per_row` columns.
    #[must_use]
    pub const fn index(self, cards_per_row: usize) -> usize {
        self.row * cards_per_row + self.col
    }

    /// Inverse of [`Cell::index`].
    #[must_use]
    pub const fn from_index(index: usize, cards_per_row: usize) -> Self {
        Self::new(index / cards_per_row, index % cards_per_row)
    }

    /// Iterate over every cell of a board in row-major order.
    pub fn all(cards_per_row: usize) -> impl Iterator<Item = Cell> {
        (0..ROWS * cards_per_row).map(move |i| Cell::from_index(i, cards_per_row))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours() {
        let cell = Cell::new(2, 0);
        assert!(cell.is_leftmost());
        assert_eq!(cell.left(), None);
        assert_eq!(cell.right(5), Some(Cell::new(2, 1)));

        let last = Cell::new(2, 4);
        assert_eq!(last.right(5), None);
        assert_eq!(last.left(), Some(Cell::new(2, 3)));
    }

    #[test]
    fn test_index_roundtrip() {
        for cell in Cell::all(7) {
            assert_eq!(Cell::from_index(cell.index(7), 7), cell);
        }
    }

    #[test]
    fn test_all_is_row_major() {
        let cells: Vec<_> = Cell::all(4).collect();
        assert_eq!(cells.len(), ROWS * 4);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[3], Cell::new(0, 3));
        assert_eq!(cells[4], Cell::new(1, 0));

        let mut sorted = cells.clone();
        sorted.sort();
        assert_eq!(cells, sorted);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cell::new(1, 3)), "(1, 3)");
    }
}
