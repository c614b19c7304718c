//! # quantum-go
//!
//! Rules engine for quantum Go: two boards evolve in lockstep, and every
//! black/white pair of placements is entangled so that the two boards
//! disagree about which stone is which color.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: a game is a `GameState` value, mutated only
//!    through `QuantumEngine`. No globals, no hidden registries.
//!
//! 2. **All or Nothing**: every operation either commits completely or
//!    returns an `EngineError` with the state untouched.
//!
//! 3. **Exact Undo**: each placement records its full effect on both
//!    boards, so a takeback restores the previous state cell for cell.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: boards and ledger use `im` for O(1)
//!   cloning; legality checks simulate on scratch copies.
//!
//! - **Links as Coordinates**: a stone names its entangled partner by
//!   position on the counterpart board, never by reference.
//!
//! ## Modules
//!
//! - `core`: coordinates, colors, config, commands, errors, RNG, state
//! - `board`: stones, boards, the board pair, group/liberty analysis
//! - `rules`: capture resolution, legality, the dual-board engine
//! - `ledger`: per-placement undo records
//! - `scoring`: territory and score reports
//! - `persist`: validated JSON/bincode snapshots
//! - `source`: move sources (`MoveSource`, uniform random, scripted)
//!
//! ```
//! use quantum_go::{Color, Coord, GameConfig, BoardSize, PlacementCommand, QuantumEngine};
//!
//! let engine = QuantumEngine::new();
//! let mut state = engine.start(GameConfig::new(BoardSize::Nine));
//!
//! engine.submit_placement(&mut state, PlacementCommand::new(Coord::new(3, 3), Color::Black)).unwrap();
//! engine.submit_placement(&mut state, PlacementCommand::new(Coord::new(3, 5), Color::White)).unwrap();
//!
//! // Board-B holds the swapped collapse.
//! assert_eq!(state.board_b().color_at(Coord::new(3, 3)), Some(Color::White));
//! ```

pub mod board;
pub mod core;
pub mod ledger;
pub mod persist;
pub mod rules;
pub mod scoring;
pub mod source;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, Color, ColorMap, Command, Coord, EngineError, FinishReason, GameConfig, GameRng, GameRngState,
    GameState, GameStatus, PairingPhase, PlacementCommand, TakebackCommand, WinnerRule, DEFAULT_KOMI,
};

pub use crate::board::{Board, BoardId, BoardPair, Group, Stone};

pub use crate::rules::{CommandOutcome, PlacementOutcome, QuantumEngine, TakebackOutcome};

pub use crate::ledger::{BoardDelta, Ledger, MoveRecord};

pub use crate::scoring::{BoardScore, ScoreReport};

pub use crate::persist::{deserialize_state, serialize_state, Snapshot};

pub use crate::source::{MoveSource, ScriptedSource, UniformSource};
