//! A single board reality.
//!
//! Backed by `im::OrdMap`, so cloning is O(1). The legality gate and the
//! capture resolver work on throwaway copies without touching the original.

use im::OrdMap;

use super::stone::Stone;
use crate::core::{BoardSize, Color, Coord};

/// Mapping from coordinate to stone, at most one stone per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    stones: OrdMap<Coord, Stone>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            stones: OrdMap::new(),
        }
    }

    /// Build a board from stones, keyed by each stone's position.
    ///
    /// Later duplicates replace earlier ones; callers that need to reject
    /// duplicates check before building.
    pub fn from_stones(size: BoardSize, stones: impl IntoIterator<Item = Stone>) -> Self {
        Self {
            size,
            stones: stones.into_iter().map(|s| (s.position, s)).collect(),
        }
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Get the stone at a position.
    #[must_use]
    pub fn get(&self, pos: Coord) -> Option<&Stone> {
        self.stones.get(&pos)
    }

    /// Color at a position, if occupied.
    #[must_use]
    pub fn color_at(&self, pos: Coord) -> Option<Color> {
        self.stones.get(&pos).map(|s| s.color)
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Coord) -> bool {
        self.stones.contains_key(&pos)
    }

    #[must_use]
    pub fn is_empty_at(&self, pos: Coord) -> bool {
        !self.stones.contains_key(&pos)
    }

    /// Insert or replace the stone at its position.
    ///
    /// Returns the stone previously there.
    pub fn put(&mut self, stone: Stone) -> Option<Stone> {
        self.stones.insert(stone.position, stone)
    }

    /// Remove the stone at a position.
    pub fn remove(&mut self, pos: Coord) -> Option<Stone> {
        self.stones.remove(&pos)
    }

    /// Iterate over stones in coordinate order.
    pub fn stones(&self) -> impl Iterator<Item = &Stone> + '_ {
        self.stones.values()
    }

    /// Iterate over stones of one color in coordinate order.
    pub fn stones_of(&self, color: Color) -> impl Iterator<Item = &Stone> + '_ {
        self.stones.values().filter(move |s| s.color == color)
    }

    /// Iterate over occupied positions in coordinate order.
    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.stones.keys().copied()
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Number of stones of one color.
    #[must_use]
    pub fn count(&self, color: Color) -> u32 {
        self.stones_of(color).count() as u32
    }

    /// Check whether two boards occupy exactly the same cells.
    #[must_use]
    pub fn same_positions(&self, other: &Board) -> bool {
        self.len() == other.len() && self.positions().eq(other.positions())
    }
}
