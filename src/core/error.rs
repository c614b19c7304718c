//! Engine error type.
//!
//! Every rejected operation leaves the `GameState` untouched. Only
//! `CorruptState` is fatal for a session: it is raised when a persisted
//! snapshot fails structural checks or a takeback finds a ledger record
//! that does not fit the boards, and is never repaired silently.

use thiserror::Error;

use super::color::Color;
use super::coord::Coord;

/// Errors surfaced by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Target already holds a stone on at least one board.
    #[error("position {0} is already occupied")]
    OccupiedCell(Coord),

    /// Placement would leave its own group without liberties.
    #[error("placing at {0} would be suicide")]
    SuicideMove(Coord),

    /// Position lies outside the grid.
    #[error("position {0} is off the board")]
    OutOfBounds(Coord),

    /// Color does not match the pairing phase, or the game no longer
    /// accepts moves (`expected` is `None`).
    #[error("wrong phase: expected {}, got {got}", describe_expected(.expected))]
    WrongPhase { expected: Option<Color>, got: Color },

    /// Takeback needs two recorded placements.
    #[error("takeback needs 2 recorded placements, have {records}")]
    InsufficientHistory { records: usize },

    /// Persisted state violates a structural invariant.
    #[error("corrupt state: {0}")]
    CorruptState(String),

    /// Wire command could not be parsed.
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

fn describe_expected(expected: &Option<Color>) -> String {
    expected.map_or_else(|| "no move".to_string(), |c| c.to_string())
}

impl EngineError {
    /// True for the rejections that make a placement illegal on the board
    /// itself (as opposed to phase or history problems).
    #[must_use]
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            EngineError::OccupiedCell(_) | EngineError::SuicideMove(_) | EngineError::OutOfBounds(_)
        )
    }
}
