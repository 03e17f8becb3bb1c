//! Gaps (also called Spaces), the four-row solitaire.
//!
//! 52 cards (or fewer, for narrower boards) are dealt into four rows and
//! the Aces are removed, leaving four gaps. A card may move into a gap
//! when it is the same-suit successor of the card to the gap's left, or a
//! 2 moving into the leftmost column. The game is won when every row runs
//! 2 upward in one suit. When no move is left the board is redealt,
//! keeping each row's correct prefix.

mod game;

pub use game::{GamePhase, GapsGame, GapsGameBuilder, PlayOutcome};
