//! Move ledger: the undo log.
//!
//! Every accepted placement appends one `MoveRecord` describing exactly
//! what changed on each board. Takeback replays records backwards.

pub mod ledger;
pub mod record;

pub use ledger::Ledger;
pub use record::{BoardDelta, MoveRecord};
