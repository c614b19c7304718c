//! A single placement's effect on both boards.

use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardId, BoardPair, Stone};
use crate::core::{Color, ColorMap, Coord, PairingPhase};

/// Changes one placement made to one board.
///
/// Undo applies these in reverse: reinsert `removed`, restore `relinked`,
/// delete `added`, subtract `prisoners`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDelta {
    /// Stones inserted by the placement.
    pub added: Vec<Stone>,
    /// Captured stones, as they stood when removed.
    pub removed: Vec<Stone>,
    /// Before-images of pre-existing stones whose link or color changed.
    /// At most one per position.
    pub relinked: Vec<Stone>,
    /// Capture credit by capturing color.
    pub prisoners: ColorMap<u32>,
}

impl BoardDelta {
    /// Remember `stone` as it was before being modified.
    ///
    /// Stones added by this same placement and positions already
    /// remembered are skipped, so the earliest image wins.
    pub fn remember(&mut self, stone: Stone) {
        let pos = stone.position;
        if self.added.iter().any(|s| s.position == pos) || self.relinked.iter().any(|s| s.position == pos) {
            return;
        }
        self.relinked.push(stone);
    }

    /// Revert this delta on `board`, returning the prisoner credit to take
    /// back.
    ///
    /// Fails without a usable board if the delta does not fit: a captured
    /// cell is occupied, or a relinked or added cell is empty.
    pub fn revert(&self, board: &mut Board) -> Result<ColorMap<u32>, String> {
        for stone in &self.removed {
            if board.put(*stone).is_some() {
                return Err(format!("captured cell {} is occupied", stone.position));
            }
        }
        for stone in &self.relinked {
            if board.put(*stone).is_none() {
                return Err(format!("relinked cell {} is empty", stone.position));
            }
        }
        for stone in &self.added {
            if board.remove(stone.position).is_none() {
                return Err(format!("added cell {} is empty", stone.position));
            }
        }
        Ok(self.prisoners)
    }

    /// Positions captured on this board.
    pub fn removed_positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.removed.iter().map(|s| s.position)
    }
}

/// One accepted placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub color: Color,
    pub position: Coord,
    pub deltas: BoardPair<BoardDelta>,
    pub phase_before: PairingPhase,
    pub round_before: Color,
    pub pending_before: Option<Coord>,
}

impl MoveRecord {
    /// Delta for one board.
    #[must_use]
    pub fn delta(&self, board: BoardId) -> &BoardDelta {
        &self.deltas[board]
    }

    /// Stones added to Board-A.
    #[must_use]
    pub fn added(&self) -> &[Stone] {
        &self.deltas.a.added
    }

    /// Stones removed from Board-A.
    #[must_use]
    pub fn removed(&self) -> &[Stone] {
        &self.deltas.a.removed
    }
}
