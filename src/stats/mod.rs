//! Session statistics.
//!
//! Counters live for as long as the `GapsGame` that owns them. They survive
//! `new_game` and board-size changes but are never written to disk.

use serde::{Deserialize, Serialize};

/// Cross-game counters for one engine instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Games started (including the first deal).
    pub total_games: u32,

    /// Games that reached the win condition.
    pub completed_games: u32,

    /// Redeals across all games.
    pub total_redeals: u32,

    /// Successful moves across all games.
    pub total_moves: u32,

    /// Successful moves in the current game.
    pub current_game_moves: u32,

    /// Successful moves since the last redeal (or deal).
    pub current_redeal_moves: u32,
}

impl SessionStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn record_new_game(&mut self) {
        self.total_games += 1;
        self.current_game_moves = 0;
        self.current_redeal_moves = 0;
    }

    pub fn record_move(&mut self) {
        self.total_moves += 1;
        self.current_game_moves += 1;
        self.current_redeal_moves += 1;
    }

    pub fn record_redeal(&mut self) {
        self.total_redeals += 1;
        self.current_redeal_moves = 0;
    }

    pub fn record_completion(&mut self) {
        self.completed_games += 1;
    }

    /// Mean redeals per started game.
    #[must_use]
    pub fn average_redeals_per_game(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.total_redeals) / f64::from(self.total_games)
        }
    }

    /// Mean moves per started game.
    #[must_use]
    pub fn average_moves_per_game(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.total_moves) / f64::from(self.total_games)
        }
    }

    /// Completed games as a percentage of started games.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.completed_games) / f64::from(self.total_games) * 100.0
        }
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "games: {}, completed: {} ({:.1}%), redeals: {} ({:.2}/game), moves: {} ({:.1}/game)",
            self.total_games,
            self.completed_games,
            self.completion_rate(),
            self.total_redeals,
            self.average_redeals_per_game(),
            self.total_moves,
            self.average_moves_per_game(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_averages() {
        let stats = SessionStats::new();
        assert_eq!(stats.average_redeals_per_game(), 0.0);
        assert_eq!(stats.average_moves_per_game(), 0.0);
        assert_eq!(stats.completion_rate(), 0.0);
    }

    #[test]
    fn test_counters() {
        let mut stats = SessionStats::new();
        stats.record_new_game();
        stats.record_move();
        stats.record_move();
        stats.record_redeal();
        stats.record_move();

        assert_eq!(stats.total_moves, 3);
        assert_eq!(stats.current_game_moves, 3);
        assert_eq!(stats.current_redeal_moves, 1);
        assert_eq!(stats.total_redeals, 1);

        stats.record_new_game();
        assert_eq!(stats.current_game_moves, 0);
        assert_eq!(stats.current_redeal_moves, 0);
        assert_eq!(stats.total_moves, 3);
    }

    #[test]
    fn test_derived_values() {
        let mut stats = SessionStats::new();
        for _ in 0..4 {
            stats.record_new_game();
        }
        stats.record_completion();
        for _ in 0..6 {
            stats.record_redeal();
        }
        for _ in 0..10 {
            stats.record_move();
        }

        assert_eq!(stats.completion_rate(), 25.0);
        assert_eq!(stats.average_redeals_per_game(), 1.5);
        assert_eq!(stats.average_moves_per_game(), 2.5);
    }

    #[test]
    fn test_reset() {
        let mut stats = SessionStats::new();
        stats.record_new_game();
        stats.record_move();
        stats.reset();
        assert_eq!(stats, SessionStats::default());
    }
}
