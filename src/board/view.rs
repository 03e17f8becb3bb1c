//! Read-only board view for presentation layers.
//!
//! A `BoardView` is a plain, serializable copy of everything a renderer
//! needs for one frame: cell contents, which cells are already correct,
//! the selected cell, and the game's status flags.

use serde::{Deserialize, Serialize};

use super::grid::Board;
use crate::cards::Card;
use crate::core::cell::{Cell, ROWS};
use crate::rules::correct_sequences;

/// One cell as a renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub cell: Cell,
    /// `None` for a gap.
    pub card: Option<Card>,
    /// In its row's correct prefix.
    pub correct: bool,
    pub selected: bool,
}

/// Snapshot of the whole board for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub cards_per_row: usize,
    /// `ROWS` rows of `cards_per_row` cells.
    pub rows: Vec<Vec<CellView>>,
    pub won: bool,
    pub stuck: bool,
    pub redeal_count: u32,
    pub correct_count: usize,
}

impl BoardView {
    /// Capture a view of `board`.
    #[must_use]
    pub fn capture(
        board: &Board,
        selected: Option<Cell>,
        won: bool,
        stuck: bool,
        redeal_count: u32,
    ) -> Self {
        let prefixes = correct_sequences(board);
        let rows = (0..ROWS)
            .map(|row| {
                board
                    .row(row)
                    .enumerate()
                    .map(|(col, card)| {
                        let cell = Cell::new(row, col);
                        CellView {
                            cell,
                            card,
                            correct: prefixes.is_correct(cell),
                            selected: selected == Some(cell),
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            cards_per_row: board.cards_per_row(),
            rows,
            won,
            stuck,
            redeal_count,
            correct_count: prefixes.total(),
        }
    }

    /// View of one cell.
    #[must_use]
    pub fn cell(&self, cell: Cell) -> &CellView {
        &self.rows[cell.row][cell.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture() {
        let board: Board = "2S 3S __ 4S / 2H 3H 4H __ / 3D 2D 4D __ / 2C 3C 4C __"
            .parse()
            .unwrap();
        let view = BoardView::capture(&board, Some(Cell::new(0, 3)), false, false, 2);

        assert_eq!(view.rows.len(), ROWS);
        assert!(view.rows.iter().all(|r| r.len() == 4));
        assert_eq!(view.correct_count, 2 + 3 + 0 + 3);
        assert!(view.cell(Cell::new(0, 1)).correct);
        assert!(!view.cell(Cell::new(0, 3)).correct);
        assert!(view.cell(Cell::new(0, 3)).selected);
        assert_eq!(view.cell(Cell::new(0, 2)).card, None);
        assert_eq!(view.redeal_count, 2);
    }

    #[test]
    fn test_view_serializes() {
        let board = Board::empty(4);
        let view = BoardView::capture(&board, None, false, true, 0);
        let json = serde_json::to_string(&view).unwrap();
        let back: BoardView = serde_json::from_str(&json).unwrap();
        assert_eq!(view, back);
    }
}
