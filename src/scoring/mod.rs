//! Scoring: live stones plus territory plus prisoners, per board.
//!
//! Each board is scored on its own. The match result combines both boards
//! according to `GameConfig::winner_rule`.

pub mod score;
pub mod territory;

pub use score::{black_wins, score_board, score_state, BoardScore, ScoreReport};
pub use territory::territory;
