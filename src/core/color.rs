//! Stone colors and per-color data storage.
//!
//! ## Color
//!
//! Black always opens a pairing cycle; White completes it.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`, used for prisoner counters,
//! scores and territory.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Stone color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, black first.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// The other color.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Slot index (black = 0, white = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "white" => Ok(Color::White),
            other => Err(format!("unknown color {other:?}")),
        }
    }
}

/// Per-color data with O(1) access.
///
/// ```
/// use quantum_go::core::{Color, ColorMap};
///
/// let mut prisoners: ColorMap<u32> = ColorMap::default();
/// prisoners[Color::Black] += 2;
///
/// assert_eq!(prisoners[Color::Black], 2);
/// assert_eq!(prisoners[Color::White], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    pub black: T,
    pub white: T,
}

impl<T> ColorMap<T> {
    /// Create a map with explicit values.
    pub const fn new(black: T, white: T) -> Self {
        Self { black, white }
    }

    /// Create a map from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Color) -> T) -> Self {
        Self {
            black: factory(Color::Black),
            white: factory(Color::White),
        }
    }

    /// Iterate over (Color, &T) pairs, black first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::Black, &self.black), (Color::White, &self.white)].into_iter()
    }

    /// Combine two maps slot by slot.
    pub fn zip_with<U, R>(&self, other: &ColorMap<U>, mut f: impl FnMut(&T, &U) -> R) -> ColorMap<R> {
        ColorMap {
            black: f(&self.black, &other.black),
            white: f(&self.white, &other.white),
        }
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite().opposite(), Color::Black);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("black".parse::<Color>(), Ok(Color::Black));
        assert_eq!(" White ".parse::<Color>(), Ok(Color::White));
        assert!("red".parse::<Color>().is_err());
        assert_eq!(Color::White.to_string(), "white");
    }

    #[test]
    fn test_color_map_indexing() {
        let mut map: ColorMap<i32> = ColorMap::from_fn(|c| c.index() as i32 * 10);
        assert_eq!(map[Color::Black], 0);
        assert_eq!(map[Color::White], 10);

        map[Color::Black] = 5;
        assert_eq!(map.black, 5);
    }

    #[test]
    fn test_color_map_zip() {
        let a = ColorMap::new(3u32, 4);
        let b = ColorMap::new(5u32, 7);
        let sum = a.zip_with(&b, |x, y| x + y);
        assert_eq!(sum, ColorMap::new(8, 11));
    }

    #[test]
    fn test_color_map_iter() {
        let map = ColorMap::new(1, 2);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Color::Black, &1), (Color::White, &2)]);
    }

    #[test]
    fn test_color_serialization() {
        assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"black\"");
        let map = ColorMap::new(1u32, 2);
        let json = serde_json::to_string(&map).unwrap();
        let back: ColorMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
