//! Game implementations.

pub mod gaps;

pub use gaps::{GamePhase, GapsGame, GapsGameBuilder, PlayOutcome};
