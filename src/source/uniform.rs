//! Uniform random move source.

use super::MoveSource;
use crate::core::{GameRng, GameRngState, GameState, PlacementCommand};
use crate::rules::QuantumEngine;

/// Picks uniformly among the placements legal on both boards.
///
/// Deterministic for a given seed and game.
#[derive(Clone, Debug)]
pub struct UniformSource {
    rng: GameRng,
}

impl UniformSource {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Checkpoint the RNG, e.g. next to a game snapshot.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume from a checkpoint.
    #[must_use]
    pub fn resume(state: &GameRngState) -> Self {
        Self::from_rng(GameRng::from_state(state))
    }
}

impl MoveSource for UniformSource {
    fn propose(&mut self, state: &GameState) -> Option<PlacementCommand> {
        let color = state.to_play()?;
        let legal = QuantumEngine::new().legal_placements(state);
        let &position = self.rng.choose(&legal)?;
        Some(PlacementCommand::new(position, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardSize, Color, GameConfig};

    #[test]
    fn test_proposes_expected_color() {
        let state = GameState::new(GameConfig::new(BoardSize::Nine));
        let mut source = UniformSource::new(7);
        let cmd = source.propose(&state).unwrap();
        assert_eq!(cmd.color, Color::Black);
        assert!(state.board_a().is_empty_at(cmd.position));
    }

    #[test]
    fn test_same_seed_same_proposals() {
        let state = GameState::new(GameConfig::new(BoardSize::Nine));
        let mut a = UniformSource::new(42);
        let mut b = UniformSource::new(42);
        for _ in 0..5 {
            assert_eq!(a.propose(&state), b.propose(&state));
        }
    }

    #[test]
    fn test_resume_continues_sequence() {
        let engine = QuantumEngine::new();
        let mut state = GameState::new(GameConfig::new(BoardSize::Nine));
        let mut source = UniformSource::new(3);
        for _ in 0..4 {
            engine.play_from(&mut state, &mut source).unwrap();
        }

        let mut resumed = UniformSource::resume(&source.rng_state());
        assert_eq!(source.propose(&state), resumed.propose(&state));
    }

    #[test]
    fn test_nothing_after_finish() {
        let engine = QuantumEngine::new();
        let mut state = GameState::new(GameConfig::new(BoardSize::Nine));
        engine.resign(&mut state, Color::White).unwrap();
        assert_eq!(UniformSource::new(1).propose(&state), None);
    }
}
