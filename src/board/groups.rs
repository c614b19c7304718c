//! Connectivity: flood-fill grouping and liberty counting.
//!
//! Groups are maximal sets of same-color stones connected orthogonally.
//! Liberties are counted per group: each distinct empty neighbor once,
//! however many members touch it.

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use super::board::Board;
use crate::core::{Color, Coord};

/// A connected group of same-color stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    /// Members in discovery order.
    pub stones: Vec<Coord>,
}

impl Group {
    #[must_use]
    pub fn contains(&self, pos: Coord) -> bool {
        self.stones.contains(&pos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

/// Partition every stone of `color` into connected groups.
///
/// Each stone is visited exactly once.
#[must_use]
pub fn find_groups(board: &Board, color: Color) -> Vec<Group> {
    let mut visited = FxHashSet::default();
    let mut groups = Vec::new();

    for stone in board.stones_of(color) {
        if visited.contains(&stone.position) {
            continue;
        }
        groups.push(flood(board, stone.position, color, &mut visited));
    }

    groups
}

/// The group containing `pos`, or `None` if the cell is empty.
#[must_use]
pub fn group_at(board: &Board, pos: Coord) -> Option<Group> {
    let color = board.color_at(pos)?;
    let mut visited = FxHashSet::default();
    Some(flood(board, pos, color, &mut visited))
}

/// Number of distinct empty cells adjacent to any member of `group`.
#[must_use]
pub fn liberties(board: &Board, group: &Group) -> usize {
    let size = board.size();
    let mut libs = FxHashSet::default();
    for &pos in &group.stones {
        for neighbor in pos.adjacent(size) {
            if board.is_empty_at(neighbor) {
                libs.insert(neighbor);
            }
        }
    }
    libs.len()
}

fn flood(board: &Board, start: Coord, color: Color, visited: &mut FxHashSet<Coord>) -> Group {
    let size = board.size();
    let mut stones = Vec::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        stones.push(current);
        for neighbor in current.adjacent(size) {
            if board.color_at(neighbor) == Some(color) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    Group { color, stones }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;
    use crate::core::BoardSize;

    fn board_with(stones: &[(u8, u8, Color)]) -> Board {
        Board::from_stones(
            BoardSize::Nine,
            stones
                .iter()
                .map(|&(x, y, c)| Stone::unresolved(Coord::new(x, y), c)),
        )
    }

    #[test]
    fn test_single_stone_liberties() {
        let board = board_with(&[(5, 5, Color::Black)]);
        let group = group_at(&board, Coord::new(5, 5)).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(liberties(&board, &group), 4);

        let corner = board_with(&[(1, 1, Color::White)]);
        let group = group_at(&corner, Coord::new(1, 1)).unwrap();
        assert_eq!(liberties(&corner, &group), 2);
    }

    #[test]
    fn test_shared_liberties_counted_once() {
        // Two stones in an L share the liberty at (2,2).
        let board = board_with(&[(1, 2, Color::Black), (2, 1, Color::Black), (1, 1, Color::Black)]);
        let group = group_at(&board, Coord::new(1, 1)).unwrap();
        assert_eq!(group.len(), 3);
        // (1,3), (2,2), (3,1)
        assert_eq!(liberties(&board, &group), 3);
    }

    #[test]
    fn test_find_groups_partitions() {
        let board = board_with(&[
            (1, 1, Color::Black),
            (1, 2, Color::Black),
            (5, 5, Color::Black),
            (5, 6, Color::White),
            (9, 9, Color::Black),
        ]);

        let groups = find_groups(&board, Color::Black);
        assert_eq!(groups.len(), 3);
        let total: usize = groups.iter().map(Group::len).sum();
        assert_eq!(total, 4);
        assert!(groups.iter().all(|g| g.color == Color::Black));

        let white = find_groups(&board, Color::White);
        assert_eq!(white.len(), 1);
        assert!(white[0].contains(Coord::new(5, 6)));
    }

    #[test]
    fn test_groups_do_not_cross_colors() {
        let board = board_with(&[(3, 3, Color::Black), (3, 4, Color::White), (3, 5, Color::Black)]);
        assert_eq!(find_groups(&board, Color::Black).len(), 2);
    }

    #[test]
    fn test_surrounded_group_has_no_liberties() {
        let board = board_with(&[(1, 1, Color::White), (1, 2, Color::Black), (2, 1, Color::Black)]);
        let group = group_at(&board, Coord::new(1, 1)).unwrap();
        assert_eq!(liberties(&board, &group), 0);
    }

    #[test]
    fn test_group_at_empty() {
        let board = board_with(&[]);
        assert!(group_at(&board, Coord::new(4, 4)).is_none());
    }
}
