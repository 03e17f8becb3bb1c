//! Game configuration types.
//!
//! A game is configured by:
//! - `cards_per_row`: board width (4-13), which also fixes the rank ladder
//! - `RedealMode`: how the board is reshuffled when it locks up
//! - `look_ahead_steps`: how long hint chains may grow
//!
//! `GapsConfig::validate` reports out-of-range values as `ConfigError`.
//! The runtime setters on `GapsGame` instead ignore them and return `false`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest supported board width.
pub const MIN_CARDS_PER_ROW: usize = 4;

/// Largest supported board width (Ace plus 2..K).
pub const MAX_CARDS_PER_ROW: usize = 13;

/// Longest hint chain a game may be configured for.
pub const MAX_LOOK_AHEAD_STEPS: usize = 4;

/// Is `cards_per_row` a supported board width?
#[must_use]
pub const fn is_valid_cards_per_row(cards_per_row: usize) -> bool {
    cards_per_row >= MIN_CARDS_PER_ROW && cards_per_row <= MAX_CARDS_PER_ROW
}

/// Redeal strategy selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedealMode {
    /// Keep correct prefixes, place one gap right after each prefix.
    #[default]
    Strategic,
    /// Keep correct prefixes, shuffle the Aces back in and remove them again.
    Random,
}

impl RedealMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            RedealMode::Strategic => RedealMode::Random,
            RedealMode::Random => RedealMode::Strategic,
        }
    }
}

impl std::fmt::Display for RedealMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedealMode::Strategic => write!(f, "strategic"),
            RedealMode::Random => write!(f, "random"),
        }
    }
}

/// Configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cards per row must be between 4 and 13, got {0}")]
    CardsPerRowOutOfRange(usize),
    #[error("look-ahead steps must be at most 4, got {0}")]
    LookAheadOutOfRange(usize),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapsConfig {
    /// Board width, including the column left free by the removed Aces.
    pub cards_per_row: usize,

    /// Strategy used by `GapsGame::redeal_with_configured_mode`.
    pub redeal_mode: RedealMode,

    /// Maximum number of steps in a hint chain (0 disables hints).
    pub look_ahead_steps: usize,
}

impl Default for GapsConfig {
    fn default() -> Self {
        Self {
            cards_per_row: 5,
            redeal_mode: RedealMode::Strategic,
            look_ahead_steps: 4,
        }
    }
}

impl GapsConfig {
    /// Set the board width.
    #[must_use]
    pub fn with_cards_per_row(mut self, cards_per_row: usize) -> Self {
        self.cards_per_row = cards_per_row;
        self
    }

    /// Set the redeal mode.
    #[must_use]
    pub fn with_redeal_mode(mut self, mode: RedealMode) -> Self {
        self.redeal_mode = mode;
        self
    }

    /// Set the hint chain length.
    #[must_use]
    pub fn with_look_ahead_steps(mut self, steps: usize) -> Self {
        self.look_ahead_steps = steps;
        self
    }

    /// Check every field against its supported range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_cards_per_row(self.cards_per_row) {
            return Err(ConfigError::CardsPerRowOutOfRange(self.cards_per_row));
        }
        if self.look_ahead_steps > MAX_LOOK_AHEAD_STEPS {
            return Err(ConfigError::LookAheadOutOfRange(self.look_ahead_steps));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GapsConfig::default();
        assert_eq!(config.cards_per_row, 5);
        assert_eq!(config.redeal_mode, RedealMode::Strategic);
        assert_eq!(config.look_ahead_steps, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GapsConfig::default()
            .with_cards_per_row(13)
            .with_redeal_mode(RedealMode::Random)
            .with_look_ahead_steps(0);

        assert_eq!(config.cards_per_row, 13);
        assert_eq!(config.redeal_mode, RedealMode::Random);
        assert_eq!(config.look_ahead_steps, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_cards_per_row() {
        for bad in [0, 3, 14, 52] {
            let err = GapsConfig::default().with_cards_per_row(bad).validate();
            assert_eq!(err, Err(ConfigError::CardsPerRowOutOfRange(bad)));
        }
        for good in MIN_CARDS_PER_ROW..=MAX_CARDS_PER_ROW {
            assert!(GapsConfig::default().with_cards_per_row(good).validate().is_ok());
        }
    }

    #[test]
    fn test_validate_look_ahead() {
        let err = GapsConfig::default().with_look_ahead_steps(5).validate();
        assert_eq!(err, Err(ConfigError::LookAheadOutOfRange(5)));
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::CardsPerRowOutOfRange(3);
        assert_eq!(err.to_string(), "cards per row must be between 4 and 13, got 3");
    }

    #[test]
    fn test_redeal_mode_toggle() {
        assert_eq!(RedealMode::Strategic.toggled(), RedealMode::Random);
        assert_eq!(RedealMode::Random.toggled(), RedealMode::Strategic);
        assert_eq!(format!("{}", RedealMode::Random), "random");
    }

    #[test]
    fn test_config_serde() {
        let config = GapsConfig::default().with_redeal_mode(RedealMode::Random);
        let json = serde_json::to_string(&config).unwrap();
        let back: GapsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
