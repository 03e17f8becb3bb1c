//! Random redeal.
//!
//! Keeps each row's correct prefix, adds the four Aces back to the pool of
//! remaining cards, deals the shuffled pool into every free cell row-major,
//! then removes the Aces again. The board ends up with four gaps, but not
//! necessarily one per row.

use super::RedealStrategy;
use crate::board::Board;
use crate::cards::aces;
use crate::core::{GameRng, RedealMode};
use crate::rules::correct_sequences;

/// Gaps land wherever the reshuffled Aces do.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomRedeal;

impl RedealStrategy for RandomRedeal {
    fn mode(&self) -> RedealMode {
        RedealMode::Random
    }

    fn redeal(&self, board: &Board, rng: &mut GameRng) -> Board {
        let prefixes = correct_sequences(board);

        let mut next = Board::empty(board.cards_per_row());
        let mut pool: Vec<_> = aces().into();
        for (cell, card) in board.cards() {
            if prefixes.is_correct(cell) {
                next.set(cell, Some(card));
            } else {
                pool.push(card);
            }
        }

        rng.shuffle(&mut pool);

        let free: Vec<_> = next.gaps().collect();
        for (cell, card) in free.into_iter().zip(pool) {
            next.set(cell, Some(card));
        }
        next.remove_aces();

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_four_gaps_after_redeal() {
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let before = Board::deal(6, &mut rng);
            let after = RandomRedeal.redeal(&before, &mut rng);

            assert_eq!(after.gap_count(), 4);
            assert_eq!(before.card_counts(), after.card_counts());
        }
    }

    #[test]
    fn test_prefixes_preserved() {
        let before = board(
            "2S 3S 5H 4S __
             2H 4H 3H __ 5S
             2D 3D 4D 5D __
             5C 2C 3C 4C __",
        );
        let prefixes = correct_sequences(&before);
        let after = RandomRedeal.redeal(&before, &mut GameRng::new(11));

        assert_eq!(prefixes.lengths(), [2, 1, 4, 0]);
        for (cell, card) in before.cards() {
            if prefixes.is_correct(cell) {
                assert_eq!(after.get(cell), Some(card));
            }
        }
        assert!(after.cards().all(|(_, c)| !c.is_ace()));
    }

    #[test]
    fn test_gaps_not_tied_to_rows() {
        // Over many seeds at least one redeal should leave a row without a gap.
        let before = board(
            "3S 2S 4S 5S __
             3H 2H 4H 5H __
             3D 2D 4D 5D __
             3C 2C 4C 5C __",
        );
        let uneven = (0..50).any(|seed| {
            let after = RandomRedeal.redeal(&before, &mut GameRng::new(seed));
            (0..4).any(|row| (0..5).all(|col| !after.is_gap(Cell::new(row, col))))
        });
        assert!(uneven);
    }
}
