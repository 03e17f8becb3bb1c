//! # gaps-engine
//!
//! Game-state engine for the Gaps (Spaces) solitaire.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: The crate owns the board, the rules, redeals and
//!    undo. Rendering, input and asset lookup belong to the host, which
//!    reads `BoardView` and `HintChain` values and draws whatever it likes.
//!
//! 2. **Total operations**: Illegal moves, missing sources and out-of-range
//!    settings return `false` / `None`. Out-of-bounds cells are a caller bug
//!    and panic.
//!
//! 3. **Explicit instances**: Each `GapsGame` is self-contained. There is no
//!    global game; run as many as you like side by side.
//!
//! ## Architecture
//!
//! - **Pure rules**: Every rule is a free function over `&Board`, so hints,
//!   liveness checks and redeals never touch the live game.
//!
//! - **Persistent Data Structures**: Board cells and history use `im-rs`,
//!   so each undo snapshot clones in O(1).
//!
//! - **Deterministic shuffles**: All randomness flows through a seeded
//!   ChaCha8 `GameRng`. Same seed, same deals, same redeals.
//!
//! ## Modules
//!
//! - `core`: Cell coordinates, RNG, configuration
//! - `cards`: Suits, ranks, the rank ladder, deck construction
//! - `board`: The 4-row grid and its render view
//! - `rules`: Move legality, correct prefixes, win and liveness checks
//! - `redeal`: Strategic and random redeal strategies
//! - `history`: Undo buffer with a redeal floor
//! - `hints`: Hint chains for renderers
//! - `stats`: Session statistics
//! - `games`: The `GapsGame` engine facade
//!
//! ```
//! use gaps_engine::{GapsGame, RedealMode};
//!
//! let mut game = GapsGame::new(2024);
//! let gaps: Vec<_> = game.board().gaps().collect();
//! if let Some((gap, from)) = gaps
//!     .into_iter()
//!     .find_map(|gap| game.source_for_gap(gap).map(|from| (gap, from)))
//! {
//!     assert!(game.move_card(from, gap));
//! }
//! if game.can_redeal() {
//!     game.redeal(RedealMode::Strategic);
//! }
//! assert_eq!(game.board().gap_count(), 4);
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod redeal;
pub mod history;
pub mod hints;
pub mod stats;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Cell, ROWS,
    GameRng, GameRngState,
    GapsConfig, RedealMode, ConfigError,
};

pub use crate::cards::{Card, CardParseError, Color, Rank, RankLadder, Suit};

pub use crate::board::{Board, BoardError, BoardView, CellView};

pub use crate::rules::{
    is_valid_move, legal_destinations, source_for_gap, Destinations,
    check_win, correct_card_count, correct_sequences, CorrectPrefixes,
    all_gaps_dead, should_enable_redeal,
};

pub use crate::redeal::{strategy_for, RandomRedeal, RedealStrategy, StrategicRedeal};

pub use crate::history::{GameSnapshot, History};

pub use crate::hints::{compute_hint_chain, correct_position_for_card, HintChain, HintStart, HintStep};

pub use crate::stats::SessionStats;

pub use crate::games::{GamePhase, GapsGame, GapsGameBuilder, PlayOutcome};
