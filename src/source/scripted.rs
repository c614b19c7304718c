//! Replays a fixed list of placements.

use std::collections::VecDeque;

use super::MoveSource;
use crate::core::{GameState, PlacementCommand};

/// Yields queued placements in order, ignoring the state.
///
/// Useful for replaying a recorded game or relaying a remote opponent's
/// moves; the engine still validates each one.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    queue: VecDeque<PlacementCommand>,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(moves: impl IntoIterator<Item = PlacementCommand>) -> Self {
        Self { queue: moves.into_iter().collect() }
    }

    pub fn push(&mut self, placement: PlacementCommand) {
        self.queue.push_back(placement);
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl MoveSource for ScriptedSource {
    fn propose(&mut self, _state: &GameState) -> Option<PlacementCommand> {
        self.queue.pop_front()
    }
}
