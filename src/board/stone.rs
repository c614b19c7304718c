//! Stones and their entanglement links.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Coord};

/// A stone on one board.
///
/// `link` is the coordinate on the counterpart board where this stone's
/// entangled partner lives. It is a lookup key, never a reference. A stone
/// with `link == position` is unresolved (its pair has not collapsed yet) or
/// has decohered (its partner was captured).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub position: Coord,
    pub color: Color,
    pub link: Coord,
}

impl Stone {
    /// Create a self-linked stone.
    #[must_use]
    pub const fn unresolved(position: Coord, color: Color) -> Self {
        Self { position, color, link: position }
    }

    /// Check whether the stone is linked to a partner.
    #[must_use]
    pub fn is_entangled(&self) -> bool {
        self.link != self.position
    }

    /// Copy with a new link.
    #[must_use]
    pub const fn linked_to(self, link: Coord) -> Self {
        Self { link, ..self }
    }

    /// Copy with the color flipped.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self { color: self.color.opposite(), ..self }
    }
}
