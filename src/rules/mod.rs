//! Go rules over the two boards.
//!
//! - `capture`: which cells a placement removes
//! - `legality`: whether a placement is allowed on one board
//! - `engine`: the dual-board state machine, takeback and scoring entry
//!   points

pub mod capture;
pub mod engine;
pub mod legality;

pub use capture::resolve_captures;
pub use engine::{CommandOutcome, PlacementOutcome, QuantumEngine, TakebackOutcome};
pub use legality::{can_place, check_placement};
