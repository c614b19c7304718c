//! Structural checks for incoming snapshots.

use std::collections::BTreeSet;

use im::OrdMap;

use super::snapshot::Snapshot;
use crate::board::{Board, BoardId, BoardPair, Stone};
use crate::core::{BoardSize, Color, Coord, PairingPhase};
use crate::ledger::MoveRecord;

type Cells = OrdMap<Coord, Stone>;

/// Check every invariant a live `GameState` maintains.
///
/// `phase` is the snapshot's phase after normalization.
pub(crate) fn validate(snapshot: &Snapshot, phase: PairingPhase) -> Result<(), String> {
    let size = snapshot.config.size;

    let a = index_board(&snapshot.boards.a, size, BoardId::A)?;
    let b = index_board(&snapshot.boards.b, size, BoardId::B)?;

    if !a.keys().eq(b.keys()) {
        return Err("boards hold different position sets".into());
    }

    check_links(&a, BoardId::A)?;
    check_links(&b, BoardId::B)?;

    let collapsed = collapsed_positions(&snapshot.ledger);
    for (pos, stone_a) in &a {
        let Some(stone_b) = b.get(pos) else {
            continue;
        };
        if stone_a.link != stone_b.link {
            return Err(format!("links at {pos} differ between boards"));
        }
        if stone_a.is_entangled() && stone_a.color == stone_b.color {
            return Err(format!("entangled position {pos} has the same color on both boards"));
        }
        // Only a collapsed pair, entangled or decohered, tells the boards apart.
        let swapped = stone_a.color != stone_b.color;
        if swapped != collapsed.contains(pos) {
            return Err(format!("colors at {pos} do not match its pairing history"));
        }
    }

    check_pending(snapshot, phase, &a, &b)?;
    check_ledger(snapshot, phase)?;
    check_history(snapshot, &a, &b)
}

/// Positions whose current stone was placed as half of a completed pair.
fn collapsed_positions(ledger: &[MoveRecord]) -> BTreeSet<Coord> {
    let mut collapsed = BTreeSet::new();
    for record in ledger {
        collapsed.remove(&record.position);
        if let (Color::White, Some(b_pos)) = (record.color, record.pending_before) {
            collapsed.insert(b_pos);
            collapsed.insert(record.position);
        }
    }
    collapsed
}

fn index_board(stones: &[Stone], size: BoardSize, id: BoardId) -> Result<Cells, String> {
    let mut cells = OrdMap::new();
    for stone in stones {
        if !size.contains(stone.position) || !size.contains(stone.link) {
            return Err(format!("stone at {} on {id} is off the board", stone.position));
        }
        if cells.insert(stone.position, *stone).is_some() {
            return Err(format!("duplicate position {} on {id}", stone.position));
        }
    }
    Ok(cells)
}

fn check_links(cells: &Cells, id: BoardId) -> Result<(), String> {
    for (pos, stone) in cells {
        if !stone.is_entangled() {
            continue;
        }
        match cells.get(&stone.link) {
            Some(partner) if partner.link == *pos => {}
            Some(_) => return Err(format!("link {pos} -> {} on {id} is not mutual", stone.link)),
            None => return Err(format!("link {pos} -> {} on {id} points at an empty cell", stone.link)),
        }
    }
    Ok(())
}

fn check_pending(snapshot: &Snapshot, phase: PairingPhase, a: &Cells, b: &Cells) -> Result<(), String> {
    match (phase, snapshot.pending_black) {
        (PairingPhase::AwaitingWhite, Some(pos)) => {
            let unpaired_black = |cells: &Cells| {
                cells
                    .get(&pos)
                    .is_some_and(|s| s.color == Color::Black && !s.is_entangled())
            };
            if unpaired_black(a) && unpaired_black(b) {
                Ok(())
            } else {
                Err(format!("pending black stone at {pos} is missing or already paired"))
            }
        }
        (PairingPhase::AwaitingWhite, None) => Err("awaiting white with no pending black stone".into()),
        (_, Some(pos)) => Err(format!("pending black stone at {pos} outside a pairing cycle")),
        (_, None) => Ok(()),
    }
}

fn check_ledger(snapshot: &Snapshot, phase: PairingPhase) -> Result<(), String> {
    let ledger = &snapshot.ledger;
    if ledger.len() != snapshot.moves as usize {
        return Err(format!("ledger holds {} records for {} moves", ledger.len(), snapshot.moves));
    }

    for (i, record) in ledger.iter().enumerate() {
        let expected = if i % 2 == 0 { Color::Black } else { Color::White };
        if record.color != expected {
            return Err(format!("ledger record {i} is {}, expected {expected}", record.color));
        }
        if !snapshot.config.size.contains(record.position) {
            return Err(format!("ledger record {i} at {} is off the board", record.position));
        }
    }

    let open_pair = ledger.len() % 2 == 1;
    if open_pair != (phase == PairingPhase::AwaitingWhite) {
        return Err(format!("{} records do not match phase {phase:?}", ledger.len()));
    }

    let pairs = ledger.len() / 2;
    let round = if pairs % 2 == 0 { Color::Black } else { Color::White };
    if snapshot.round != round {
        return Err(format!("round owner {} after {pairs} pairs, expected {round}", snapshot.round));
    }

    Ok(())
}

/// Undo the whole ledger on copies of the boards.
///
/// Each record must revert cleanly, keep the position sets equal, and
/// the prisoner counters must drain to exactly zero.
fn check_history(snapshot: &Snapshot, a: &Cells, b: &Cells) -> Result<(), String> {
    let size = snapshot.config.size;
    let mut boards = BoardPair::new(
        Board::from_stones(size, a.values().copied()),
        Board::from_stones(size, b.values().copied()),
    );
    let mut prisoners = snapshot.prisoners;

    for (i, record) in snapshot.ledger.iter().enumerate().rev() {
        for id in BoardId::ALL {
            let delta = &record.deltas[id];
            match delta.added.as_slice() {
                [stone] if stone.position == record.position && stone.color == record.color => {}
                _ => return Err(format!("ledger record {i} does not add its own stone on {id}")),
            }
            let credit = delta
                .revert(&mut boards[id])
                .map_err(|e| format!("ledger record {i} does not fit {id}: {e}"))?;
            for color in Color::ALL {
                prisoners[id][color] = prisoners[id][color]
                    .checked_sub(credit[color])
                    .ok_or_else(|| format!("{id} holds fewer {color} prisoners than its ledger credits"))?;
            }
        }
        if !boards.a.same_positions(&boards.b) {
            return Err(format!("undoing ledger record {i} splits the boards"));
        }
    }

    for id in BoardId::ALL {
        if Color::ALL.iter().any(|&color| prisoners[id][color] != 0) {
            return Err(format!("{id} prisoner counts exceed its ledger credits"));
        }
    }
    Ok(())
}
