//! Capture resolution.
//!
//! Order matters: opponent groups are judged first and removed from a
//! working copy, then the played color's groups are judged on the reduced
//! board. A move that empties an opposing group captures before it can be
//! judged suicide.

use std::collections::BTreeSet;

use crate::board::{find_groups, liberties, Board};
use crate::core::{Color, Coord};

/// Cells to remove after `just_played` moved on `board`.
#[must_use]
pub fn resolve_captures(board: &Board, just_played: Color) -> BTreeSet<Coord> {
    let mut captured = BTreeSet::new();
    let mut working = board.clone();

    for group in find_groups(board, just_played.opposite()) {
        if liberties(board, &group) == 0 {
            captured.extend(group.stones.iter().copied());
        }
    }
    for &pos in &captured {
        working.remove(pos);
    }

    for group in find_groups(&working, just_played) {
        if liberties(&working, &group) == 0 {
            captured.extend(group.stones);
        }
    }

    captured
}
