//! Grid geometry: coordinates, board sizes, adjacency.
//!
//! ## Coordinates
//!
//! Coordinates are 1-indexed: `(1, 1)` is a corner, `(N, N)` the opposite
//! corner. On the wire a coordinate is the string `"x,y"`.
//!
//! ```
//! use quantum_go::core::{BoardSize, Coord};
//!
//! let corner = Coord::new(1, 1);
//! assert_eq!(corner.adjacent(BoardSize::Nine).len(), 2);
//!
//! let parsed: Coord = "3,5".parse().unwrap();
//! assert_eq!(parsed, Coord::new(3, 5));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

/// Board dimension. Only 9, 13 and 19 are playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BoardSize {
    Nine,
    Thirteen,
    Nineteen,
}

impl BoardSize {
    /// Side length N.
    #[must_use]
    pub const fn dimension(self) -> u8 {
        match self {
            BoardSize::Nine => 9,
            BoardSize::Thirteen => 13,
            BoardSize::Nineteen => 19,
        }
    }

    /// Number of intersections (N²).
    #[must_use]
    pub const fn area(self) -> u32 {
        let n = self.dimension() as u32;
        n * n
    }

    /// Lenient conversion for stored room settings: anything that is not a
    /// playable size becomes 19.
    ///
    /// ```
    /// use quantum_go::core::BoardSize;
    ///
    /// assert_eq!(BoardSize::normalize(13), BoardSize::Thirteen);
    /// assert_eq!(BoardSize::normalize(7), BoardSize::Nineteen);
    /// ```
    #[must_use]
    pub fn normalize(raw: i32) -> Self {
        u8::try_from(raw)
            .ok()
            .and_then(|n| Self::try_from(n).ok())
            .unwrap_or(BoardSize::Nineteen)
    }

    /// Iterate over every coordinate, column-major (x outer, y inner).
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        let n = self.dimension();
        (1..=n).flat_map(move |x| (1..=n).map(move |y| Coord::new(x, y)))
    }

    /// Check whether a coordinate lies on the grid.
    #[must_use]
    pub const fn contains(self, coord: Coord) -> bool {
        let n = self.dimension();
        coord.x >= 1 && coord.x <= n && coord.y >= 1 && coord.y <= n
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        BoardSize::Nineteen
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            9 => Ok(BoardSize::Nine),
            13 => Ok(BoardSize::Thirteen),
            19 => Ok(BoardSize::Nineteen),
            other => Err(format!("unsupported board size {other}")),
        }
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> u8 {
        size.dimension()
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.dimension();
        write!(f, "{n}x{n}")
    }
}

/// A grid intersection, 1-indexed.
///
/// Ordered by `x` then `y` so board iteration is deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Create a coordinate. Bounds are checked against a `BoardSize` later.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Orthogonal neighbors clipped to the grid.
    #[must_use]
    pub fn adjacent(self, size: BoardSize) -> SmallVec<[Coord; 4]> {
        let n = size.dimension();
        let mut out = SmallVec::new();
        if self.x > 1 {
            out.push(Coord::new(self.x - 1, self.y));
        }
        if self.x < n {
            out.push(Coord::new(self.x + 1, self.y));
        }
        if self.y > 1 {
            out.push(Coord::new(self.x, self.y - 1));
        }
        if self.y < n {
            out.push(Coord::new(self.x, self.y + 1));
        }
        out
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("malformed coordinate {s:?}"))?;
        let x = x
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("malformed coordinate {s:?}"))?;
        let y = y
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("malformed coordinate {s:?}"))?;
        Ok(Coord::new(x, y))
    }
}

impl TryFrom<String> for Coord {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Coord> for String {
    fn from(coord: Coord) -> String {
        coord.to_string()
    }
}
