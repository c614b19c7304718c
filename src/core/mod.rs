//! Core types: coordinates, colors, configuration, commands, errors, RNG
//! and the game state.
//!
//! Everything here is plain data. Behavior lives in `board`, `rules` and
//! `scoring`; the state is mutated only by `rules::QuantumEngine`.

pub mod color;
pub mod command;
pub mod config;
pub mod coord;
pub mod error;
pub mod rng;
pub mod state;

pub use color::{Color, ColorMap};
pub use command::{Command, PlacementCommand, TakebackCommand};
pub use config::{GameConfig, WinnerRule, DEFAULT_KOMI};
pub use coord::{BoardSize, Coord};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
pub use state::{FinishReason, GameState, GameStatus, PairingPhase};
