//! Win detection and correct-prefix tracking.
//!
//! A row is *correct up to column k* when its first `k + 1` cells read
//! 2, 3, 4, ... in one suit. Correctness is prefix-only: the first gap or
//! out-of-sequence card ends it, whatever follows.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Card;
use crate::core::cell::{Cell, ROWS};

/// Length of the correct prefix of every row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrectPrefixes {
    lengths: [usize; ROWS],
}

impl CorrectPrefixes {
    /// Number of correct cells at the start of `row`.
    #[must_use]
    pub fn len(&self, row: usize) -> usize {
        self.lengths[row]
    }

    /// Is every row empty of correct cells?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Is `cell` part of its row's correct prefix?
    #[must_use]
    pub fn is_correct(&self, cell: Cell) -> bool {
        cell.col < self.lengths[cell.row]
    }

    /// Total correct cells across the board.
    #[must_use]
    pub fn total(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Per-row lengths, top to bottom.
    #[must_use]
    pub fn lengths(&self) -> [usize; ROWS] {
        self.lengths
    }

    /// Per-cell flags for one row, `cards_per_row` long.
    #[must_use]
    pub fn row_flags(&self, row: usize, cards_per_row: usize) -> Vec<bool> {
        (0..cards_per_row).map(|col| col < self.lengths[row]).collect()
    }
}

/// Walk every row left to right and measure its correct prefix.
#[must_use]
pub fn correct_sequences(board: &Board) -> CorrectPrefixes {
    let ladder = board.ladder();
    let mut lengths = [0; ROWS];

    for (row, length) in lengths.iter_mut().enumerate() {
        let mut previous: Option<Card> = None;
        for (col, cell) in board.row(row).enumerate() {
            let Some(card) = cell else { break };
            let in_sequence = match previous {
                None => card.rank == ladder.lowest(),
                Some(prev) => {
                    ladder.rank_at(col) == Some(card.rank) && card.suit == prev.suit
                }
            };
            if !in_sequence {
                break;
            }
            *length = col + 1;
            previous = Some(card);
        }
    }

    CorrectPrefixes { lengths }
}

/// Number of cards sitting in their row's correct prefix.
#[must_use]
pub fn correct_card_count(board: &Board) -> usize {
    correct_sequences(board).total()
}

/// Has the board been solved?
///
/// Every row must hold the whole ladder, 2 first, in the suit fixed by
/// its column-0 card. The last column is left over for the gaps.
#[must_use]
pub fn check_win(board: &Board) -> bool {
    let ladder = board.ladder();

    (0..ROWS).all(|row| {
        let mut cells = board.row(row);
        let Some(Some(first)) = cells.next() else {
            return false;
        };
        if first.rank != ladder.lowest() {
            return false;
        }
        cells
            .zip(ladder.ranks().skip(1))
            .all(|(cell, rank)| cell == Some(Card::new(first.suit, rank)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    const SOLVED: &str = "2S 3S 4S 5S __
                          2H 3H 4H 5H __
                          2D 3D 4D 5D __
                          2C 3C 4C 5C __";

    #[test]
    fn test_solved_board() {
        let b = board(SOLVED);
        assert!(check_win(&b));
        assert_eq!(correct_sequences(&b).lengths(), [4, 4, 4, 4]);
        assert_eq!(correct_card_count(&b), 16);
    }

    #[test]
    fn test_prefix_stops_at_gap() {
        let b = board(
            "2S 3S __ 4S 5S
             2H 3H 4H 5H __
             3D 2D 4D 5D __
             2C 3C 4C 5C __",
        );
        let prefixes = correct_sequences(&b);
        assert_eq!(prefixes.lengths(), [2, 4, 0, 4]);
        assert!(prefixes.is_correct(Cell::new(0, 1)));
        assert!(!prefixes.is_correct(Cell::new(0, 3)));
        assert!(!check_win(&b));
    }

    #[test]
    fn test_prefix_is_prefix_only() {
        // 4D 5D sit in their home columns but the row breaks before them.
        let b = board(
            "2S 3S 4S 5S __
             2H 3H 4H 5H __
             2D 3C 4D 5D __
             2C 3D 4C 5C __",
        );
        let prefixes = correct_sequences(&b);
        assert_eq!(prefixes.len(2), 1);
        assert_eq!(prefixes.row_flags(2, 5), vec![true, false, false, false, false]);
        assert_eq!(prefixes.len(3), 1);
    }

    #[test]
    fn test_suit_must_match_row_start() {
        let b = board(
            "2S 3S 4S 5S __
             2H 3H 4H 5H __
             2D 3D 4D 5C __
             2C 3C 4C 5D __",
        );
        assert!(!check_win(&b));
        assert_eq!(correct_card_count(&b), 14);
    }

    #[test]
    fn test_empty_board() {
        let b = Board::empty(4);
        let prefixes = correct_sequences(&b);
        assert!(prefixes.is_empty());
        assert!(!check_win(&b));
    }
}
