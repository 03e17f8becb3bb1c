//! The Gaps engine.

use tracing::{debug, info};

use crate::board::{Board, BoardView};
use crate::cards::Card;
use crate::core::config::{is_valid_cards_per_row, MAX_LOOK_AHEAD_STEPS};
use crate::core::{Cell, ConfigError, GameRng, GameRngState, GapsConfig, RedealMode};
use crate::hints::{compute_hint_chain, correct_position_for_card, HintChain, HintStart};
use crate::history::{GameSnapshot, History};
use crate::redeal::strategy_for;
use crate::rules::{
    check_win, correct_card_count, correct_sequences, is_valid_move, legal_destinations,
    should_enable_redeal, source_for_gap, CorrectPrefixes, Destinations,
};
use crate::stats::SessionStats;

/// Derived game phase. Only `won` is stored; `Stuck` is recomputed on
/// every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Playing,
    Stuck,
    Won,
}

/// Result of a click-style play (`play_card` / `play_gap`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Nothing to do: the game is won, or the cell holds the wrong thing.
    Ignored,
    /// The card has no legal destination.
    NoDestination,
    /// No card may fill the gap.
    NoSource,
    /// The selected card may not go to this gap. Selection is kept.
    Illegal,
    /// Several destinations; the card is now selected.
    Selected(Cell),
    /// A card moved.
    Moved { from: Cell, to: Cell },
}

/// A single Gaps game plus its session statistics.
///
/// Owns the board, the undo history, and the RNG used for deals and
/// redeals. All methods run to completion synchronously; hosts that share
/// a game between threads wrap it in their own lock.
#[derive(Clone, Debug)]
pub struct GapsGame {
    config: GapsConfig,
    board: Board,
    selected: Option<Cell>,
    won: bool,
    completion_recorded: bool,
    redeal_count: u32,
    history: History<GameSnapshot>,
    stats: SessionStats,
    rng: GameRng,
}

/// Builder for creating a `GapsGame`.
#[derive(Clone, Debug, Default)]
pub struct GapsGameBuilder {
    config: GapsConfig,
}

impl GapsGameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cards_per_row(mut self, cards_per_row: usize) -> Self {
        self.config.cards_per_row = cards_per_row;
        self
    }

    #[must_use]
    pub fn redeal_mode(mut self, mode: RedealMode) -> Self {
        self.config.redeal_mode = mode;
        self
    }

    #[must_use]
    pub fn look_ahead_steps(mut self, steps: usize) -> Self {
        self.config.look_ahead_steps = steps;
        self
    }

    /// Validate the configuration, deal, and record the opening snapshot.
    pub fn build(self, seed: u64) -> Result<GapsGame, ConfigError> {
        GapsGame::with_config(self.config, seed)
    }
}

impl GapsGame {
    /// A game with the default configuration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::start(GapsConfig::default(), seed)
    }

    /// A game with `config`, dealt from `seed`.
    pub fn with_config(config: GapsConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, seed))
    }

    fn start(config: GapsConfig, seed: u64) -> Self {
        let cards_per_row = config.cards_per_row;
        let mut game = Self {
            config,
            board: Board::empty(cards_per_row),
            selected: None,
            won: false,
            completion_recorded: false,
            redeal_count: 0,
            history: History::new(),
            stats: SessionStats::new(),
            rng: GameRng::new(seed),
        };
        game.deal_fresh();
        game.stats.record_new_game();
        info!(cards_per_row, seed, "started game");
        game
    }

    // === Game Flow ===

    /// Start a new game with `cards_per_row` columns.
    ///
    /// Returns `false` (and changes nothing) for widths outside 4..=13.
    pub fn new_game(&mut self, cards_per_row: usize) -> bool {
        if !is_valid_cards_per_row(cards_per_row) {
            return false;
        }
        self.config.cards_per_row = cards_per_row;
        self.deal_fresh();
        self.stats.record_new_game();
        info!(cards_per_row, total_games = self.stats.total_games, "new game");
        true
    }

    /// Resize the board and deal it afresh.
    ///
    /// Out-of-range widths are ignored and return `false`. Unlike
    /// `new_game`, this does not count as a started game.
    pub fn set_cards_per_row(&mut self, cards_per_row: usize) -> bool {
        if !is_valid_cards_per_row(cards_per_row) {
            debug!(cards_per_row, "ignored out-of-range board width");
            return false;
        }
        self.config.cards_per_row = cards_per_row;
        self.deal_fresh();
        info!(cards_per_row, "resized board");
        true
    }

    /// Replace the board wholesale, e.g. with a hand-built position.
    ///
    /// History restarts from this board. The board's width becomes the
    /// configured width.
    pub fn load_board(&mut self, board: Board) {
        self.config.cards_per_row = board.cards_per_row();
        self.won = check_win(&board);
        self.completion_recorded = false;
        self.board = board;
        self.selected = None;
        self.redeal_count = 0;
        self.history.clear();
        self.record_snapshot();
        debug!(cards_per_row = self.config.cards_per_row, won = self.won, "loaded board");
    }

    fn deal_fresh(&mut self) {
        self.board = Board::deal(self.config.cards_per_row, &mut self.rng);
        self.selected = None;
        self.won = false;
        self.completion_recorded = false;
        self.redeal_count = 0;
        self.history.clear();
        self.record_snapshot();
        debug!(cards_per_row = self.config.cards_per_row, "dealt board");
    }

    /// Move the card at `from` into the gap at `to`.
    ///
    /// Returns `false` without touching anything when `from` is a gap or
    /// the move is illegal. On success the selection is cleared, the win
    /// latch is updated, and a snapshot is recorded. The first win of a
    /// deal counts one completed game, however often undo replays it.
    ///
    /// # Panics
    ///
    /// Panics if either cell lies outside the board.
    pub fn move_card(&mut self, from: Cell, to: Cell) -> bool {
        let Some(card) = self.board.get(from) else {
            return false;
        };
        if !is_valid_move(&self.board, card, to) {
            return false;
        }

        self.board.relocate(from, to);
        self.stats.record_move();
        self.selected = None;

        // Undo can clear the latch; a game is still only completed once.
        if !self.won && check_win(&self.board) {
            self.won = true;
            if !self.completion_recorded {
                self.completion_recorded = true;
                self.stats.record_completion();
            }
            info!(
                redeals = self.redeal_count,
                moves = self.stats.current_game_moves,
                "game won"
            );
        }

        self.record_snapshot();
        debug!(%card, %from, %to, "moved card");
        true
    }

    /// Reshuffle the board with `mode`, keeping every correct prefix.
    ///
    /// Not gated on `can_redeal`. Clears the selection and the win latch,
    /// and pins the undo floor at the pre-redeal entry.
    pub fn redeal(&mut self, mode: RedealMode) {
        self.board = strategy_for(mode).redeal(&self.board, &mut self.rng);
        self.redeal_count += 1;
        self.stats.record_redeal();
        self.selected = None;
        self.won = false;
        self.history.mark_floor();
        self.record_snapshot();
        info!(%mode, redeal_count = self.redeal_count, "redealt board");
    }

    /// Redeal with the mode from the configuration.
    pub fn redeal_with_configured_mode(&mut self) {
        self.redeal(self.config.redeal_mode);
    }

    /// Step back one snapshot. Returns `false` at the redeal floor or the
    /// opening deal. A won game may still be undone.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.step_back().cloned() else {
            return false;
        };
        self.apply(snapshot);
        debug!(cursor = ?self.history.cursor(), "undo");
        true
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn record_snapshot(&mut self) {
        self.history.record(GameSnapshot {
            board: self.board.clone(),
            selected: self.selected,
            won: self.won,
            redeal_count: self.redeal_count,
        });
    }

    fn apply(&mut self, snapshot: GameSnapshot) {
        self.board = snapshot.board;
        self.selected = snapshot.selected;
        self.won = snapshot.won;
        self.redeal_count = snapshot.redeal_count;
    }

    // === Selection and Click-Style Play ===

    /// Select the card at `cell`. Gaps cannot be selected, nor anything
    /// once the game is won.
    pub fn select(&mut self, cell: Cell) -> bool {
        if self.won || self.board.is_gap(cell) {
            return false;
        }
        self.selected = Some(cell);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<Cell> {
        self.selected
    }

    /// Play the card at `cell`: move it if it has exactly one destination,
    /// select it if it has several.
    pub fn play_card(&mut self, cell: Cell) -> PlayOutcome {
        if self.won || self.board.is_gap(cell) {
            return PlayOutcome::Ignored;
        }
        let destinations = legal_destinations(&self.board, cell);
        match destinations.as_slice() {
            [] => PlayOutcome::NoDestination,
            &[to] => {
                if self.move_card(cell, to) {
                    PlayOutcome::Moved { from: cell, to }
                } else {
                    PlayOutcome::Illegal
                }
            }
            _ => {
                self.selected = Some(cell);
                PlayOutcome::Selected(cell)
            }
        }
    }

    /// Fill the gap at `cell`: with the selected card if there is one,
    /// otherwise with the card `source_for_gap` finds.
    pub fn play_gap(&mut self, cell: Cell) -> PlayOutcome {
        if self.won || !self.board.is_gap(cell) {
            return PlayOutcome::Ignored;
        }
        let (from, fallback) = match self.selected {
            Some(from) => (from, PlayOutcome::Illegal),
            None => match source_for_gap(&self.board, cell) {
                Some(from) => (from, PlayOutcome::NoSource),
                None => return PlayOutcome::NoSource,
            },
        };
        if self.move_card(from, cell) {
            PlayOutcome::Moved { from, to: cell }
        } else {
            fallback
        }
    }

    // === Queries ===

    #[must_use]
    pub fn legal_destinations(&self, from: Cell) -> Destinations {
        legal_destinations(&self.board, from)
    }

    #[must_use]
    pub fn source_for_gap(&self, gap: Cell) -> Option<Cell> {
        source_for_gap(&self.board, gap)
    }

    /// The win latch: set by the first winning move, cleared by redeal and
    /// restored by undo.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// No card can move anywhere.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        should_enable_redeal(&self.board)
    }

    /// Should a redeal be offered?
    #[must_use]
    pub fn can_redeal(&self) -> bool {
        !self.won && self.is_stuck()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.won {
            GamePhase::Won
        } else if self.is_stuck() {
            GamePhase::Stuck
        } else {
            GamePhase::Playing
        }
    }

    #[must_use]
    pub fn correct_card_count(&self) -> usize {
        correct_card_count(&self.board)
    }

    #[must_use]
    pub fn correct_sequences(&self) -> CorrectPrefixes {
        correct_sequences(&self.board)
    }

    /// Read-only view of the current position for a renderer.
    #[must_use]
    pub fn snapshot_for_render(&self) -> BoardView {
        BoardView::capture(
            &self.board,
            self.selected,
            self.won,
            self.is_stuck(),
            self.redeal_count,
        )
    }

    /// Hint chain from `start`, capped at the configured look-ahead.
    #[must_use]
    pub fn hint_chain(&self, start: HintStart) -> HintChain {
        compute_hint_chain(&self.board, start, self.config.look_ahead_steps)
    }

    #[must_use]
    pub fn correct_position_for_card(&self, card: Card) -> Option<Cell> {
        correct_position_for_card(&self.board, card)
    }

    // === Settings ===

    pub fn set_redeal_mode(&mut self, mode: RedealMode) {
        self.config.redeal_mode = mode;
    }

    /// Switch between strategic and random redeals, returning the new mode.
    pub fn toggle_redeal_mode(&mut self) -> RedealMode {
        self.config.redeal_mode = self.config.redeal_mode.toggled();
        self.config.redeal_mode
    }

    /// Set the hint look-ahead. Values above 4 are ignored.
    pub fn set_look_ahead_steps(&mut self, steps: usize) -> bool {
        if steps > MAX_LOOK_AHEAD_STEPS {
            return false;
        }
        self.config.look_ahead_steps = steps;
        true
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &GapsConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[must_use]
    pub fn redeal_count(&self) -> u32 {
        self.redeal_count
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn history_cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    /// History index undo cannot go below, if a redeal has happened.
    #[must_use]
    pub fn redeal_floor(&self) -> Option<usize> {
        self.history.floor()
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
