//! Core engine types: board coordinates, RNG, configuration.
//!
//! Everything else in the crate is built on these.

pub mod cell;
pub mod config;
pub mod rng;

pub use cell::{Cell, ROWS};
pub use config::{
    ConfigError, GapsConfig, RedealMode, MAX_CARDS_PER_ROW, MAX_LOOK_AHEAD_STEPS,
    MIN_CARDS_PER_ROW,
};
pub use rng::{GameRng, GameRngState};
