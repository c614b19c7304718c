//! The two parallel realities.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Which board reality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardId {
    /// Holds placements literally.
    A,
    /// Holds the alternate collapse: paired colors swapped.
    B,
}

impl BoardId {
    pub const ALL: [BoardId; 2] = [BoardId::A, BoardId::B];
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardId::A => write!(f, "board A"),
            BoardId::B => write!(f, "board B"),
        }
    }
}

/// One value per board, indexed by `BoardId`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardPair<T> {
    pub a: T,
    pub b: T,
}

impl<T> BoardPair<T> {
    pub const fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Same value on both boards.
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self { a: value.clone(), b: value }
    }

    /// Iterate over (BoardId, &T), A first.
    pub fn iter(&self) -> impl Iterator<Item = (BoardId, &T)> {
        [(BoardId::A, &self.a), (BoardId::B, &self.b)].into_iter()
    }

    /// Apply a function to both slots.
    pub fn map<U>(&self, mut f: impl FnMut(BoardId, &T) -> U) -> BoardPair<U> {
        BoardPair {
            a: f(BoardId::A, &self.a),
            b: f(BoardId::B, &self.b),
        }
    }
}

impl<T> Index<BoardId> for BoardPair<T> {
    type Output = T;

    fn index(&self, id: BoardId) -> &Self::Output {
        match id {
            BoardId::A => &self.a,
            BoardId::B => &self.b,
        }
    }
}

impl<T> IndexMut<BoardId> for BoardPair<T> {
    fn index_mut(&mut self, id: BoardId) -> &mut Self::Output {
        match id {
            BoardId::A => &mut self.a,
            BoardId::B => &mut self.b,
        }
    }
}
