//! The dual-board state machine.
//!
//! `QuantumEngine` is the only thing that mutates a `GameState`. Each
//! operation either commits completely or returns an error with the state
//! untouched: placements are built on O(1) clones of both boards and
//! swapped in at the end.
//!
//! ## Placement protocol
//!
//! - The stone goes on Board-A at `pos` and is mirrored onto Board-B at the
//!   same position with the same color.
//! - A black placement leaves the pair open and remembers `bPos`.
//! - A white placement at `wPos` links `bPos ↔ wPos` on both boards, then
//!   flips both colors on Board-B.
//! - Captures are resolved per board. Each board credits prisoners from its
//!   own resolution; the union of captured cells leaves both boards so
//!   they keep identical position sets.
//! - A survivor whose partner was captured decoheres (links to itself).

use std::collections::BTreeSet;

use tracing::{debug, info};

use super::capture::resolve_captures;
use super::legality::{can_place, check_placement};
use crate::board::{Board, BoardId, BoardPair, Stone};
use crate::core::{
    Color, Command, Coord, EngineError, FinishReason, GameConfig, GameState, GameStatus, PairingPhase,
    PlacementCommand,
};
use crate::ledger::{BoardDelta, MoveRecord};
use crate::scoring::{score_state, ScoreReport};
use crate::source::MoveSource;

/// What an accepted placement did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub placement: PlacementCommand,
    /// Cells each board's own capture resolution selected.
    pub captured: BoardPair<Vec<Coord>>,
    /// Cells removed from both boards.
    pub removed: Vec<Coord>,
    /// `(bPos, wPos)` when this placement completed a pair.
    pub paired: Option<(Coord, Coord)>,
    /// Phase after the placement.
    pub phase: PairingPhase,
}

/// What a takeback undid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TakebackOutcome {
    /// Undone placements, newest first.
    pub undone: Vec<PlacementCommand>,
    pub phase: PairingPhase,
}

/// Result of `QuantumEngine::execute`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Placed(PlacementOutcome),
    TookBack(TakebackOutcome),
}

/// Rules for quantum Go.
///
/// Stateless; every operation takes the game state explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuantumEngine;

impl QuantumEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Start a game and log it.
    #[must_use]
    pub fn start(&self, config: GameConfig) -> GameState {
        info!(size = %config.size, komi = config.komi, rule = ?config.winner_rule, "game started");
        GameState::new(config)
    }

    /// Validate and apply one placement.
    pub fn submit_placement(
        &self,
        state: &mut GameState,
        placement: PlacementCommand,
    ) -> Result<PlacementOutcome, EngineError> {
        let PlacementCommand { position: pos, color } = placement;

        let expected = state.to_play();
        if expected != Some(color) {
            debug!(%pos, %color, ?expected, "placement rejected: wrong phase");
            return Err(EngineError::WrongPhase { expected, got: color });
        }

        for id in BoardId::ALL {
            if let Err(err) = check_placement(&state.boards[id], pos, color) {
                debug!(%pos, %color, board = %id, %err, "placement rejected");
                return Err(err);
            }
        }

        let partner = match color {
            Color::Black => None,
            Color::White => Some(pending_partner(state)?),
        };

        // Scratch copies; committed only at the end.
        let mut boards = state.boards.clone();
        let mut deltas: BoardPair<BoardDelta> = BoardPair::default();

        let placed = Stone::unresolved(pos, color);
        for id in BoardId::ALL {
            boards[id].put(placed);
            deltas[id].added.push(placed);
        }

        if let Some(b_pos) = partner {
            for id in BoardId::ALL {
                let flip = id == BoardId::B;
                for (at, link) in [(b_pos, pos), (pos, b_pos)] {
                    let Some(&stone) = boards[id].get(at) else {
                        continue;
                    };
                    deltas[id].remember(stone);
                    let linked = stone.linked_to(link);
                    boards[id].put(if flip { linked.flipped() } else { linked });
                }
            }
            debug!(black = %b_pos, white = %pos, "pair linked");
        }

        // Each board resolves with the color standing at `pos` on it.
        let captured = boards.map(|_, board| match board.color_at(pos) {
            Some(mover) => resolve_captures(board, mover),
            None => BTreeSet::new(),
        });

        let mut prisoners = state.prisoners;
        for id in BoardId::ALL {
            for &cell in &captured[id] {
                if let Some(stone) = boards[id].get(cell) {
                    let credit = stone.color.opposite();
                    deltas[id].prisoners[credit] += 1;
                    prisoners[id][credit] += 1;
                }
            }
        }

        let removed: BTreeSet<Coord> = captured.a.union(&captured.b).copied().collect();
        for id in BoardId::ALL {
            remove_with_decoherence(&mut boards[id], &removed, &mut deltas[id]);
        }
        if !removed.is_empty() {
            debug!(%pos, removed = removed.len(), "captures resolved");
        }

        // Everything validated; commit.
        let record = MoveRecord {
            color,
            position: pos,
            deltas,
            phase_before: state.phase,
            round_before: state.round,
            pending_before: state.pending_black,
        };

        state.boards = boards;
        state.prisoners = prisoners;
        state.moves += 1;
        state.ledger.push(record);

        match color {
            Color::Black => {
                state.phase = PairingPhase::AwaitingWhite;
                state.pending_black = Some(pos);
            }
            Color::White => {
                state.phase = PairingPhase::Resolved;
                state.pending_black = None;
                state.round = state.round.opposite();
                state.phase = state.phase.settled();
                info!(moves = state.moves, round = %state.round, "pair resolved");
            }
        }

        debug!(%pos, %color, moves = state.moves, phase = ?state.phase, "placement accepted");

        Ok(PlacementOutcome {
            placement,
            captured: captured.map(|_, cells| cells.iter().copied().collect()),
            removed: removed.into_iter().collect(),
            paired: partner.map(|b_pos| (b_pos, pos)),
            phase: state.phase,
        })
    }

    /// Undo the last two placements.
    pub fn takeback(&self, state: &mut GameState) -> Result<TakebackOutcome, EngineError> {
        if state.is_finished() {
            return Err(EngineError::WrongPhase { expected: None, got: state.round });
        }
        let records = state.ledger.len();
        if records < 2 {
            debug!(records, "takeback rejected");
            return Err(EngineError::InsufficientHistory { records });
        }

        // Revert on a copy; a ledger that does not fit the boards leaves the
        // live state untouched.
        let mut next = state.clone();
        let mut undone = Vec::with_capacity(2);
        for _ in 0..2 {
            let Some(record) = next.ledger.pop() else {
                break;
            };
            for id in BoardId::ALL {
                let credit = record.deltas[id]
                    .revert(&mut next.boards[id])
                    .map_err(|e| EngineError::CorruptState(format!("undoing {} at {} on {id}: {e}", record.color, record.position)))?;
                for color in Color::ALL {
                    next.prisoners[id][color] = next.prisoners[id][color].checked_sub(credit[color]).ok_or_else(|| {
                        EngineError::CorruptState(format!("{id} holds fewer {color} prisoners than its ledger credits"))
                    })?;
                }
            }
            if !next.boards.a.same_positions(&next.boards.b) {
                return Err(EngineError::CorruptState(format!(
                    "undoing {} at {} splits the boards",
                    record.color, record.position
                )));
            }
            next.moves = next
                .moves
                .checked_sub(1)
                .ok_or_else(|| EngineError::CorruptState("ledger holds more records than moves".into()))?;
            next.phase = record.phase_before;
            next.round = record.round_before;
            next.pending_black = record.pending_before;
            undone.push(PlacementCommand::new(record.position, record.color));
        }
        *state = next;

        debug!(moves = state.moves, phase = ?state.phase, "takeback applied");
        Ok(TakebackOutcome { undone, phase: state.phase })
    }

    /// Score the current position. Pure.
    #[must_use]
    pub fn current_score(&self, state: &GameState) -> ScoreReport {
        score_state(state)
    }

    /// Dispatch a typed command.
    pub fn execute(&self, state: &mut GameState, command: Command) -> Result<CommandOutcome, EngineError> {
        match command {
            Command::Place(placement) => self.submit_placement(state, placement).map(CommandOutcome::Placed),
            Command::Takeback(_) => self.takeback(state).map(CommandOutcome::TookBack),
        }
    }

    /// Score the game and end it.
    pub fn finish(&self, state: &mut GameState) -> Result<ScoreReport, EngineError> {
        if state.is_finished() {
            return Err(EngineError::WrongPhase { expected: None, got: state.round });
        }
        let report = score_state(state);
        state.status = GameStatus::Finished { winner: report.winner, reason: FinishReason::Scored };
        info!(winner = ?report.winner, black = report.average.black, white = report.average.white, "game finished");
        Ok(report)
    }

    /// End the game with `color` resigning.
    pub fn resign(&self, state: &mut GameState, color: Color) -> Result<(), EngineError> {
        if state.is_finished() {
            return Err(EngineError::WrongPhase { expected: None, got: color });
        }
        state.status = GameStatus::Finished {
            winner: Some(color.opposite()),
            reason: FinishReason::Resignation,
        };
        info!(%color, "game resigned");
        Ok(())
    }

    /// Every cell where the expected color may legally play on both boards.
    ///
    /// Empty once the game is finished.
    #[must_use]
    pub fn legal_placements(&self, state: &GameState) -> Vec<Coord> {
        let Some(color) = state.to_play() else {
            return Vec::new();
        };
        state
            .config
            .size
            .coords()
            .filter(|&pos| BoardId::ALL.iter().all(|&id| can_place(&state.boards[id], pos, color)))
            .collect()
    }

    /// Ask `source` for a placement and submit it.
    ///
    /// Returns `Ok(None)` when the source has nothing to propose. Proposals
    /// go through full validation.
    pub fn play_from<S: MoveSource + ?Sized>(
        &self,
        state: &mut GameState,
        source: &mut S,
    ) -> Result<Option<PlacementOutcome>, EngineError> {
        match source.propose(state) {
            Some(placement) => self.submit_placement(state, placement).map(Some),
            None => Ok(None),
        }
    }
}

/// Pending black position for a white placement.
fn pending_partner(state: &GameState) -> Result<Coord, EngineError> {
    let b_pos = state
        .pending_black
        .ok_or_else(|| EngineError::CorruptState("awaiting white with no pending black stone".into()))?;
    if BoardId::ALL.iter().any(|&id| state.boards[id].is_empty_at(b_pos)) {
        return Err(EngineError::CorruptState(format!("pending black stone at {b_pos} is missing")));
    }
    Ok(b_pos)
}

/// Remove `cells` from `board`, decohering any surviving partners.
fn remove_with_decoherence(board: &mut Board, cells: &BTreeSet<Coord>, delta: &mut BoardDelta) {
    let mut orphans = Vec::new();
    for &cell in cells {
        let Some(stone) = board.remove(cell) else {
            continue;
        };
        if stone.is_entangled() && !cells.contains(&stone.link) {
            orphans.push((stone.link, cell));
        }
        delta.removed.push(stone);
    }

    for (survivor, lost) in orphans {
        let Some(&stone) = board.get(survivor) else {
            continue;
        };
        if stone.link == lost {
            delta.remember(stone);
            board.put(stone.linked_to(survivor));
        }
    }
}
