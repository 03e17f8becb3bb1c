//! Hint chains: "this card goes here, then that card fills the hole it
//! left, then ...".
//!
//! A chain is computed on a scratch copy of the board. Each step is
//! applied before the next one is looked up, so later steps see the cells
//! earlier steps vacated. The live board is never touched.
//!
//! ```
//! use gaps_engine::board::Board;
//! use gaps_engine::core::Cell;
//! use gaps_engine::hints::{compute_hint_chain, HintStart};
//!
//! let board: Board = "2S __ 4S 3S 5S
//!                     2H 3H 4H 5H __
//!                     2D 3D 4D 5D __
//!                     2C 3C 4C 5C __".parse().unwrap();
//!
//! let chain = compute_hint_chain(&board, HintStart::Gap(Cell::new(0, 1)), 4);
//! // 3S fills (0, 1), then 5S fills the hole 3S left next to 4S.
//! assert_eq!(chain.len(), 2);
//! assert_eq!((chain[0].from, chain[0].to), (Cell::new(0, 3), Cell::new(0, 1)));
//! assert_eq!((chain[1].from, chain[1].to), (Cell::new(0, 4), Cell::new(0, 3)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::cards::Card;
use crate::core::Cell;
use crate::rules::{is_valid_move, source_for_gap};

/// Where a hint chain starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintStart {
    /// Start from a gap: which card fills it, and what follows.
    Gap(Cell),
    /// Start from a card: where it belongs, and what follows.
    Card(Cell),
}

/// One step of a hint chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintStep {
    pub card: Card,
    pub from: Cell,
    pub to: Cell,
}

/// Ordered hint steps. Look-ahead is at most a handful of steps.
pub type HintChain = SmallVec<[HintStep; 4]>;

/// Where `card` belongs: the cell right of its same-suit predecessor.
///
/// Scans row-major for the predecessor. Returns `None` for 2s (they belong
/// in column 0 of whichever row they start), for cards off the ladder, and
/// when the predecessor sits in the last column.
#[must_use]
pub fn correct_position_for_card(board: &Board, card: Card) -> Option<Cell> {
    let ladder = board.ladder();
    let previous = Card::new(card.suit, ladder.predecessor(card.rank)?);
    board
        .cards()
        .filter(|&(_, c)| c == previous)
        .find_map(|(cell, _)| cell.right(board.cards_per_row()))
}

/// Build a hint chain of at most `max_steps` steps.
///
/// - `HintStart::Gap`: the first step fills the gap with `source_for_gap`.
/// - `HintStart::Card`: the first step moves the card toward
///   `correct_position_for_card`. If that cell is occupied the chain is
///   just this one step.
///
/// Every later step fills the cell vacated by the step before it. The
/// chain stops early when no card fits, a source cell repeats, or the only
/// fit is the card the previous step just placed.
#[must_use]
pub fn compute_hint_chain(board: &Board, start: HintStart, max_steps: usize) -> HintChain {
    let mut chain = HintChain::new();
    if max_steps == 0 {
        return chain;
    }

    let first = match start {
        HintStart::Gap(gap) => source_for_gap(board, gap).and_then(|from| {
            let card = board.get(from)?;
            Some(HintStep { card, from, to: gap })
        }),
        HintStart::Card(from) => board.get(from).and_then(|card| {
            let to = correct_position_for_card(board, card)?;
            Some(HintStep { card, from, to })
        }),
    };
    let Some(first) = first else {
        return chain;
    };

    let mut scratch = board.clone();
    if !is_valid_move(&scratch, first.card, first.to) {
        chain.push(first);
        return chain;
    }
    scratch.relocate(first.from, first.to);
    chain.push(first);

    while let Some(&last) = chain.last() {
        if chain.len() >= max_steps {
            break;
        }
        let vacated = last.from;
        let Some(from) = source_for_gap(&scratch, vacated) else {
            break;
        };
        // A column-0 hole can pick up the 2 that just left it.
        if from == last.to || chain.iter().any(|step| step.from == from) {
            break;
        }
        let Some(card) = scratch.get(from) else {
            break;
        };
        scratch.relocate(from, vacated);
        chain.push(HintStep {
            card,
            from,
            to: vacated,
        });
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn test_gap_chain_follows_vacated_cells() {
        let b = board(
            "2H __ __ 4H 5H
             2S 3S 4S 5S __
             2D 3H 4D 5D __
             2C 3C 4C 3D 5C",
        );
        let chain = compute_hint_chain(&b, HintStart::Gap(Cell::new(0, 1)), 4);

        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0], HintStep { card: card("3H"), from: Cell::new(2, 1), to: Cell::new(0, 1) });
        assert_eq!(chain[1], HintStep { card: card("3D"), from: Cell::new(3, 3), to: Cell::new(2, 1) });
        assert_eq!(chain[2], HintStep { card: card("5C"), from: Cell::new(3, 4), to: Cell::new(3, 3) });
    }

    #[test]
    fn test_two_into_leftmost_gap_does_not_bounce_back() {
        let b = board(
            "__ 3S 4S 5S 3H
             2S 2H 4H 5H __
             2D 3D 4D 5D __
             2C 3C 4C 5C __",
        );
        let chain = compute_hint_chain(&b, HintStart::Gap(Cell::new(0, 0)), 4);

        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0], HintStep { card: card("2S"), from: Cell::new(1, 0), to: Cell::new(0, 0) });
    }

    #[test]
    fn test_leftmost_vacated_cell_takes_next_two() {
        let b = board(
            "2S 3S 4S 5S __
             3H 2H 4H 5H __
             __ 3D 4D 5D 2D
             2C 3C 4C 5C __",
        );
        let chain = compute_hint_chain(&b, HintStart::Gap(Cell::new(2, 0)), 2);

        // 2S leaves (0, 0); the first 2 now found row-major is 2H.
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0], HintStep { card: card("2S"), from: Cell::new(0, 0), to: Cell::new(2, 0) });
        assert_eq!(chain[1], HintStep { card: card("2H"), from: Cell::new(1, 1), to: Cell::new(0, 0) });
    }

    #[test]
    fn test_max_steps_caps_chain() {
        let b = board(
            "2H __ __ 4H 5H
             2S 3S 4S 5S __
             2D 3H 4D 5D __
             2C 3C 4C 3D 5C",
        );
        assert_eq!(compute_hint_chain(&b, HintStart::Gap(Cell::new(0, 1)), 1).len(), 1);
        assert!(compute_hint_chain(&b, HintStart::Gap(Cell::new(0, 1)), 0).is_empty());
    }

    #[test]
    fn test_dead_gap_has_no_chain() {
        let b = board("2S 3S 4S __ / 2H 3H 4H __ / 2D 3D 4D __ / 2C 3C 4C __");
        assert!(compute_hint_chain(&b, HintStart::Gap(Cell::new(0, 3)), 4).is_empty());
    }

    #[test]
    fn test_card_chain() {
        let b = board(
            "2S __ 4S 3S
             2H 3H 4H __
             2D 3D 4D __
             2C 3C 4C __",
        );
        let chain = compute_hint_chain(&b, HintStart::Card(Cell::new(0, 3)), 4);

        assert_eq!(chain[0], HintStep { card: card("3S"), from: Cell::new(0, 3), to: Cell::new(0, 1) });
        // (0, 3) now sits right of 4S, the top rank, so nothing follows.
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_card_chain_to_occupied_cell() {
        let b = board(
            "2S 4S __ 3S
             2H 3H 4H __
             2D 3D 4D __
             2C 3C 4C __",
        );
        let chain = compute_hint_chain(&b, HintStart::Card(Cell::new(0, 3)), 4);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].to, Cell::new(0, 1));
    }

    #[test]
    fn test_correct_position_for_card() {
        let b = board(
            "2S __ 4S 3S
             2H 3H 4H __
             2D 3D 4D __
             2C 3C 4C __",
        );
        assert_eq!(correct_position_for_card(&b, card("3S")), Some(Cell::new(0, 1)));
        assert_eq!(correct_position_for_card(&b, card("4H")), Some(Cell::new(1, 2)));
        assert_eq!(correct_position_for_card(&b, card("2S")), None);
    }

    #[test]
    fn test_correct_position_predecessor_in_last_column() {
        let b = board(
            "3S __ 4S 2S
             2H 3H 4H __
             2D 3D 4D __
             2C 3C 4C __",
        );
        assert_eq!(correct_position_for_card(&b, card("3S")), None);
    }

    #[test]
    fn test_chain_leaves_board_untouched() {
        let b = board(
            "2S __ 4S 3S
             2H 3H 4H __
             2D 3D 4D __
             2C 3C 4C __",
        );
        let before = b.clone();
        let _ = compute_hint_chain(&b, HintStart::Gap(Cell::new(0, 1)), 4);
        assert_eq!(b, before);
    }
}
