//! Serializable game snapshot.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::validate::validate;
use crate::board::{Board, BoardPair, Stone};
use crate::core::{Color, ColorMap, Coord, EngineError, GameConfig, GameState, GameStatus, PairingPhase};
use crate::ledger::{Ledger, MoveRecord};

/// Persisted shape of a game.
///
/// Stones are stored as flat lists so that a malformed payload can carry
/// duplicates, which validation then rejects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: GameConfig,
    pub boards: BoardPair<Vec<Stone>>,
    pub phase: PairingPhase,
    pub pending_black: Option<Coord>,
    pub moves: u32,
    pub prisoners: BoardPair<ColorMap<u32>>,
    pub round: Color,
    pub status: GameStatus,
    pub ledger: Vec<MoveRecord>,
}

impl Snapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(|e| EngineError::CorruptState(format!("json encode: {e}")))
    }

    /// Decode from JSON. Structure only; see `deserialize_state`.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::CorruptState(format!("json decode: {e}")))
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(|e| EngineError::CorruptState(format!("bincode encode: {e}")))
    }

    /// Decode from bincode. Structure only; see `deserialize_state`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes).map_err(|e| EngineError::CorruptState(format!("bincode decode: {e}")))
    }
}

/// Capture a state as a snapshot.
#[must_use]
pub fn serialize_state(state: &GameState) -> Snapshot {
    Snapshot {
        config: state.config,
        boards: state.boards.map(|_, board| board.stones().copied().collect()),
        phase: state.phase,
        pending_black: state.pending_black,
        moves: state.moves,
        prisoners: state.prisoners,
        round: state.round,
        status: state.status,
        ledger: state.ledger.iter().cloned().collect(),
    }
}

/// Rebuild a state from a snapshot, rejecting anything structurally
/// inconsistent.
///
/// A snapshot stored mid-resolution (`Resolved`) is restored as
/// `AwaitingBlack`.
pub fn deserialize_state(snapshot: Snapshot) -> Result<GameState, EngineError> {
    let phase = snapshot.phase.settled();

    if let Err(reason) = validate(&snapshot, phase) {
        warn!(%reason, "rejected corrupt snapshot");
        return Err(EngineError::CorruptState(reason));
    }

    let size = snapshot.config.size;
    let [a, b] = [snapshot.boards.a, snapshot.boards.b].map(|stones| Board::from_stones(size, stones));

    Ok(GameState {
        config: snapshot.config,
        boards: BoardPair::new(a, b),
        phase,
        status: snapshot.status,
        round: snapshot.round,
        moves: snapshot.moves,
        prisoners: snapshot.prisoners,
        pending_black: snapshot.pending_black,
        ledger: snapshot.ledger.into_iter().collect::<Ledger>(),
    })
}
