//! Move hints.
//!
//! ## Key Types
//!
//! - `HintStart`: a chain starts from a gap or from a card
//! - `HintStep`: one `(card, from, to)` move
//! - `HintChain`: the ordered steps a renderer draws as arrows

pub mod chain;

pub use chain::{compute_hint_chain, correct_position_for_card, HintChain, HintStart, HintStep};
