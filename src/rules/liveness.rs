//! Stuck-board detection.
//!
//! Two independent predicates decide whether the board has locked up:
//! - `should_enable_redeal` looks for any card with a destination, then
//!   for any gap with a source.
//! - `all_gaps_dead` only asks every gap for a source.
//!
//! On any board with at least one gap they agree: a card with a legal
//! destination is itself a source for that gap, and a gap's source can
//! always legally move into it.

use crate::board::Board;

use super::legality::{legal_destinations, source_for_gap};

/// True when no card can move and no gap can be filled.
#[must_use]
pub fn should_enable_redeal(board: &Board) -> bool {
    let any_move = board
        .cards()
        .any(|(cell, _)| !legal_destinations(board, cell).is_empty());
    if any_move {
        return false;
    }

    let any_fill = board
        .gaps()
        .any(|gap| source_for_gap(board, gap).is_some());
    !any_fill
}

/// True when the board has gaps and none of them can be filled.
#[must_use]
pub fn all_gaps_dead(board: &Board) -> bool {
    let mut gaps = board.gaps().peekable();
    if gaps.peek().is_none() {
        return false;
    }
    gaps.all(|gap| source_for_gap(board, gap).is_none())
}
