//! Redeal strategies for a locked-up board.
//!
//! Both strategies keep every row's correct prefix in place and reshuffle
//! everything else. They differ in where the new gaps end up:
//! - `StrategicRedeal`: exactly one gap right after each row's prefix
//! - `RandomRedeal`: the four Aces are shuffled back in and removed again,
//!   so the gaps land wherever the Aces did
//!
//! Strategies are pure board-to-board transforms. Bookkeeping (redeal
//! count, history floor) belongs to `GapsGame`.

pub mod random;
pub mod strategic;

pub use random::RandomRedeal;
pub use strategic::StrategicRedeal;

use crate::board::Board;
use crate::core::{GameRng, RedealMode};

/// A way of reshuffling the board while preserving correct prefixes.
pub trait RedealStrategy: Send + Sync {
    /// Which mode this strategy implements.
    fn mode(&self) -> RedealMode;

    /// Produce the redealt board. `board` is left untouched.
    fn redeal(&self, board: &Board, rng: &mut GameRng) -> Board;
}

/// The strategy implementing `mode`.
#[must_use]
pub fn strategy_for(mode: RedealMode) -> &'static dyn RedealStrategy {
    match mode {
        RedealMode::Strategic => &StrategicRedeal,
        RedealMode::Random => &RandomRedeal,
    }
}
