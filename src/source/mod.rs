//! Move sources: anything that proposes placements.
//!
//! A human UI, a remote opponent and an AI all look the same to the engine:
//! they propose a `PlacementCommand` for the current state, and the engine
//! validates it like any other submission.

pub mod scripted;
pub mod uniform;

pub use scripted::ScriptedSource;
pub use uniform::UniformSource;

use crate::core::{GameState, PlacementCommand};

/// Proposes placements.
pub trait MoveSource {
    /// Propose a placement for the color to play.
    ///
    /// Returns `None` if the source has nothing to offer.
    fn propose(&mut self, state: &GameState) -> Option<PlacementCommand>;
}
