//! Gaps rules, as pure functions over a `Board`.
//!
//! - `legality`: which card may go into which gap
//! - `progress`: correct row prefixes and win detection
//! - `liveness`: whether the board has locked up
//!
//! Nothing here mutates; `GapsGame` calls into these to validate intents
//! and answer queries.

pub mod legality;
pub mod liveness;
pub mod progress;

pub use legality::{is_valid_move, legal_destinations, source_for_gap, Destinations};
pub use liveness::{all_gaps_dead, should_enable_redeal};
pub use progress::{check_win, correct_card_count, correct_sequences, CorrectPrefixes};
