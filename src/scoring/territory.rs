//! Territory: empty regions enclosed by a single color.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::board::Board;
use crate::core::{Color, ColorMap, Coord};

/// Count territory for each color.
///
/// Every maximal empty region is flood-filled. A region bordered only by
/// one color belongs to it; a region bordering both colors, or no stone at
/// all, is neutral.
#[must_use]
pub fn territory(board: &Board) -> ColorMap<u32> {
    let size = board.size();
    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut owned = ColorMap::new(0, 0);

    for start in size.coords() {
        if board.is_occupied(start) || !visited.insert(start) {
            continue;
        }

        let mut region = 0u32;
        let mut borders = ColorMap::new(false, false);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            region += 1;
            for neighbor in current.adjacent(size) {
                match board.color_at(neighbor) {
                    Some(color) => borders[color] = true,
                    None => {
                        if visited.insert(neighbor) {
                            queue.push_back(neighbor);
                        }
                    }
                }
            }
        }

        match (borders[Color::Black], borders[Color::White]) {
            (true, false) => owned[Color::Black] += region,
            (false, true) => owned[Color::White] += region,
            _ => {}
        }
    }

    owned
}
