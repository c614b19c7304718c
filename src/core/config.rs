//! Game configuration.
//!
//! Hosts configure a game at creation by providing a `GameConfig`:
//! - `size`: 9, 13 or 19
//! - `komi`: added to black's winning threshold (default 7)
//! - `winner_rule`: how the two boards' results combine into a match result
//!
//! The configuration is persisted with every snapshot.

use serde::{Deserialize, Serialize};

use super::coord::BoardSize;

/// Default komi, credited to black's threshold.
pub const DEFAULT_KOMI: u32 = 7;

/// How the match winner is derived from the two boards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinnerRule {
    /// Average each color's score across both boards (floored) and apply the
    /// single-board threshold to the averages.
    #[default]
    Averaged,
    /// Both boards must name the same winner; otherwise the match is drawn.
    Unanimous,
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board dimension.
    pub size: BoardSize,

    /// Points added to black's threshold.
    pub komi: u32,

    /// Match winner rule.
    pub winner_rule: WinnerRule,
}

impl GameConfig {
    /// Create a configuration with default komi and winner rule.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            komi: DEFAULT_KOMI,
            winner_rule: WinnerRule::default(),
        }
    }

    /// Set komi.
    #[must_use]
    pub fn with_komi(mut self, komi: u32) -> Self {
        self.komi = komi;
        self
    }

    /// Set the match winner rule.
    #[must_use]
    pub fn with_winner_rule(mut self, rule: WinnerRule) -> Self {
        self.winner_rule = rule;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(BoardSize::Nine);
        assert_eq!(config.size, BoardSize::Nine);
        assert_eq!(config.komi, 7);
        assert_eq!(config.winner_rule, WinnerRule::Averaged);

        assert_eq!(GameConfig::default().size, BoardSize::Nineteen);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(BoardSize::Thirteen)
            .with_komi(5)
            .with_winner_rule(WinnerRule::Unanimous);

        assert_eq!(config.komi, 5);
        assert_eq!(config.winner_rule, WinnerRule::Unanimous);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(BoardSize::Nine).with_winner_rule(WinnerRule::Unanimous);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
