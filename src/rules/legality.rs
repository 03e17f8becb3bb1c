//! Move legality.
//!
//! A card may move into a gap when:
//! - the gap is in column 0 and the card is the lowest ladder rank (a 2), or
//! - the gap's left neighbour is a card of the same suit whose ladder rank
//!   is exactly one below the moving card's.
//!
//! A gap whose left neighbour is a gap, an Ace, or the top ladder rank can
//! never be filled.

use smallvec::SmallVec;

use crate::board::Board;
use crate::cards::Card;
use crate::core::Cell;

/// Ordered list of gaps (row-major). Rarely more than the four gaps.
pub type Destinations = SmallVec<[Cell; 4]>;

/// Can `card` legally be placed at `target`?
///
/// Only the board contents matter: the card does not have to be on the
/// board (callers can ask about hypothetical cards).
///
/// # Panics
///
/// Panics if `target` is off the board.
#[must_use]
pub fn is_valid_move(board: &Board, card: Card, target: Cell) -> bool {
    if !board.is_gap(target) {
        return false;
    }

    let ladder = board.ladder();
    let Some(left) = target.left() else {
        return card.rank == ladder.lowest();
    };
    let Some(left_card) = board.get(left) else {
        return false;
    };

    match (ladder.index_of(left_card.rank), ladder.index_of(card.rank)) {
        (Some(left_index), Some(card_index)) => {
            left_index + 1 == card_index && left_card.suit == card.suit
        }
        _ => false,
    }
}

/// Every gap the card at `from` may legally move to, in row-major order.
///
/// Returns an empty list when `from` is itself a gap.
#[must_use]
pub fn legal_destinations(board: &Board, from: Cell) -> Destinations {
    let Some(card) = board.get(from) else {
        return Destinations::new();
    };
    board
        .gaps()
        .filter(|&gap| is_valid_move(board, card, gap))
        .collect()
}

/// The card that may fill the gap at `gap`, if any.
///
/// - Column 0: the first 2 found in a row-major scan.
/// - Otherwise: the same-suit successor of the left neighbour.
///
/// Returns `None` when `gap` is occupied, its left neighbour is a gap or
/// the top ladder rank, or the needed card is not on the board.
#[must_use]
pub fn source_for_gap(board: &Board, gap: Cell) -> Option<Cell> {
    if !board.is_gap(gap) {
        return None;
    }

    let ladder = board.ladder();
    match gap.left() {
        None => board.find(|card| card.rank == ladder.lowest()),
        Some(left) => {
            let left_card = board.get(left)?;
            let needed = Card::new(left_card.suit, ladder.successor(left_card.rank)?);
            board.position_of(needed)
        }
    }
}
