//! Card system: suits, ranks, the rank ladder and deck construction.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Card`: plain value types (`Copy`)
//! - `Color`: derived from the suit, never stored
//! - `RankLadder`: ranks in play for a board width, in row order

pub mod card;
pub mod deck;
pub mod ladder;

pub use card::{Card, CardParseError, Color, Rank, Suit};
pub use deck::{aces, full_deck, shuffled_deck};
pub use ladder::RankLadder;
