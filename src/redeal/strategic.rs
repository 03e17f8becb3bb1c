//! Strategic redeal.
//!
//! 1. Keep each row's correct prefix.
//! 2. Pool every other card and shuffle the pool.
//! 3. Leave a gap right after each prefix.
//! 4. Deal the pool row-major into the cells after each row's gap.
//!
//! The prefix can never cover the last column, so every row gets exactly
//! one gap and the pool fits the remaining cells exactly.

use tracing::warn;

use super::RedealStrategy;
use crate::board::Board;
use crate::core::cell::{Cell, ROWS};
use crate::core::{GameRng, RedealMode};
use crate::rules::correct_sequences;

/// One guaranteed gap per row, right after the correct prefix.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrategicRedeal;

impl RedealStrategy for StrategicRedeal {
    fn mode(&self) -> RedealMode {
        RedealMode::Strategic
    }

    /// # Panics
    ///
    /// Debug builds panic if an Ace is still on the board: the Aces are
    /// the gaps, and the pool would not fit the cells left for it.
    fn redeal(&self, board: &Board, rng: &mut GameRng) -> Board {
        debug_assert!(
            board.cards().all(|(_, card)| !card.is_ace()),
            "strategic redeal needs a board with its Aces removed"
        );
        let cards_per_row = board.cards_per_row();
        let prefixes = correct_sequences(board);

        let mut next = Board::empty(cards_per_row);
        let mut pool = Vec::new();
        for (cell, card) in board.cards() {
            if prefixes.is_correct(cell) {
                next.set(cell, Some(card));
            } else {
                pool.push(card);
            }
        }

        rng.shuffle(&mut pool);

        let mut dealt = pool.into_iter();
        for row in 0..ROWS {
            let gap_col = prefixes.len(row);
            for col in gap_col + 1..cards_per_row {
                match dealt.next() {
                    Some(card) => next.set(Cell::new(row, col), Some(card)),
                    None => break,
                }
            }
        }

        let leftover = dealt.count();
        if leftover > 0 {
            // Only reachable from hand-built boards with fewer than four gaps.
            warn!(leftover, "strategic redeal ran out of cells");
        }

        next
    }
}
