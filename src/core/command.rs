//! Typed commands accepted by the engine.
//!
//! Move sources (human UI, remote opponent, AI) talk to the engine only
//! through this closed set. Wire payloads are parsed and validated here,
//! before anything reaches the state machine:
//!
//! ```
//! use quantum_go::core::{Color, Coord, PlacementCommand};
//!
//! let cmd = PlacementCommand::parse("3,5", "white").unwrap();
//! assert_eq!(cmd.position, Coord::new(3, 5));
//! assert_eq!(cmd.color, Color::White);
//!
//! assert!(PlacementCommand::parse("3;5", "white").is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::coord::Coord;
use super::error::EngineError;

/// Place one stone.
///
/// `color` is the color the submitter claims; it must match the pairing
/// phase's expected color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementCommand {
    pub position: Coord,
    pub color: Color,
}

impl PlacementCommand {
    /// Create a placement command.
    #[must_use]
    pub const fn new(position: Coord, color: Color) -> Self {
        Self { position, color }
    }

    /// Parse a wire placement (`"x,y"`, `"black"`/`"white"`).
    pub fn parse(position: &str, color: &str) -> Result<Self, EngineError> {
        let position = position.parse::<Coord>().map_err(EngineError::InvalidCommand)?;
        let color = color.parse::<Color>().map_err(EngineError::InvalidCommand)?;
        Ok(Self { position, color })
    }
}

/// Undo the most recent two placements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TakebackCommand;

/// Every mutation the engine accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Command {
    Place(PlacementCommand),
    Takeback(TakebackCommand),
}

impl From<PlacementCommand> for Command {
    fn from(cmd: PlacementCommand) -> Self {
        Command::Place(cmd)
    }
}

impl From<TakebackCommand> for Command {
    fn from(cmd: TakebackCommand) -> Self {
        Command::Takeback(cmd)
    }
}
