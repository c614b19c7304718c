//! Game state: both boards plus pairing progress and history.
//!
//! ## Pairing phase
//!
//! A cycle is one black placement followed by one white placement:
//! `AwaitingBlack → AwaitingWhite → Resolved → AwaitingBlack`.
//! `Resolved` only exists inside the white placement that completes the
//! pair; a state at rest is always awaiting a color.
//!
//! ## GameState
//!
//! Complete game state:
//! - Config (size, komi, winner rule)
//! - Board-A and Board-B
//! - Phase, pending black position, round owner, status
//! - Move count, per-board prisoner counters
//! - Move ledger
//!
//! Boards and ledger use `im` persistent structures, so cloning a state for
//! simulation or snapshotting is O(1).

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap};
use super::config::GameConfig;
use super::coord::Coord;
use crate::board::{Board, BoardPair, Stone};
use crate::ledger::Ledger;

/// Where the current pairing cycle stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingPhase {
    #[default]
    AwaitingBlack,
    AwaitingWhite,
    Resolved,
}

impl PairingPhase {
    /// Color allowed to place next, `None` while resolving.
    #[must_use]
    pub const fn expected_color(self) -> Option<Color> {
        match self {
            PairingPhase::AwaitingBlack => Some(Color::Black),
            PairingPhase::AwaitingWhite => Some(Color::White),
            PairingPhase::Resolved => None,
        }
    }

    /// Map the transient `Resolved` phase to the state it settles into.
    #[must_use]
    pub const fn settled(self) -> Self {
        match self {
            PairingPhase::Resolved => PairingPhase::AwaitingBlack,
            other => other,
        }
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Scored,
    Resignation,
}

/// Whether the game still accepts moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Playing,
    /// `winner` is `None` for a draw.
    Finished {
        winner: Option<Color>,
        reason: FinishReason,
    },
}

impl GameStatus {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished { .. })
    }

    /// Winner of a finished game. `None` while playing or on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Finished { winner, .. } => *winner,
            GameStatus::Playing => None,
        }
    }
}

/// Complete state of one quantum Go game.
///
/// Mutated only through `QuantumEngine`; fields are crate-visible so the
/// engine and the snapshot layer can work on them directly.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) boards: BoardPair<Board>,
    pub(crate) phase: PairingPhase,
    pub(crate) status: GameStatus,
    /// Color owning the current round; flips on every resolution.
    pub(crate) round: Color,
    pub(crate) moves: u32,
    /// Stones captured on each board, keyed by capturing color.
    pub(crate) prisoners: BoardPair<ColorMap<u32>>,
    /// Board position of the black stone awaiting its white partner.
    pub(crate) pending_black: Option<Coord>,
    pub(crate) ledger: Ledger,
}

impl GameState {
    /// Create an empty game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let empty = Board::new(config.size);
        Self {
            config,
            boards: BoardPair::splat(empty),
            phase: PairingPhase::AwaitingBlack,
            status: GameStatus::Playing,
            round: Color::Black,
            moves: 0,
            prisoners: BoardPair::default(),
            pending_black: None,
            ledger: Ledger::new(),
        }
    }

    /// Create a game with unpaired stones already on the board.
    ///
    /// Each stone is self-linked and has the same color on both boards.
    /// Setup stones are not recorded in the ledger, so they cannot be taken
    /// back. Intended for handicap positions and test fixtures.
    ///
    /// # Panics
    ///
    /// Panics if a position is off the board or listed twice.
    #[must_use]
    pub fn from_setup(config: GameConfig, stones: &[(Coord, Color)]) -> Self {
        let mut state = Self::new(config);
        for &(pos, color) in stones {
            assert!(config.size.contains(pos), "setup stone {pos} is off the board");
            for board in [&mut state.boards.a, &mut state.boards.b] {
                let previous = board.put(Stone::unresolved(pos, color));
                assert!(previous.is_none(), "setup position {pos} listed twice");
            }
        }
        state
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn boards(&self) -> &BoardPair<Board> {
        &self.boards
    }

    #[must_use]
    pub fn board_a(&self) -> &Board {
        &self.boards.a
    }

    #[must_use]
    pub fn board_b(&self) -> &Board {
        &self.boards.b
    }

    #[must_use]
    pub fn phase(&self) -> PairingPhase {
        self.phase
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    #[must_use]
    pub fn round(&self) -> Color {
        self.round
    }

    /// Accepted placements minus those taken back.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn prisoners(&self) -> &BoardPair<ColorMap<u32>> {
        &self.prisoners
    }

    #[must_use]
    pub fn pending_black(&self) -> Option<Coord> {
        self.pending_black
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Color expected to place next, `None` once the game is over.
    #[must_use]
    pub fn to_play(&self) -> Option<Color> {
        if self.is_finished() {
            None
        } else {
            self.phase.expected_color()
        }
    }
}
