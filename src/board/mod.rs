//! The Gaps board.
//!
//! ## Key Types
//!
//! - `Board`: 4 × `cards_per_row` grid of optional cards
//! - `BoardError`: rejected explicit layouts
//! - `BoardView`: read-only per-frame copy for presentation layers
//!
//! ## Invariants
//!
//! - Each cell holds at most one card and no card appears twice.
//! - Ordinary moves keep the gap count fixed: a card leaves one gap and
//!   fills another.

pub mod grid;
pub mod view;

pub use grid::{Board, BoardError};
pub use view::{BoardView, CellView};
