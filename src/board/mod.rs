//! Boards, stones and connectivity.
//!
//! - `Stone`: color plus entanglement link
//! - `Board`: one reality, a persistent coordinate → stone map
//! - `BoardPair`/`BoardId`: the two parallel realities
//! - `groups`: flood-fill grouping and liberty counting

pub mod board;
pub mod groups;
pub mod pair;
pub mod stone;

pub use board::Board;
pub use groups::{find_groups, group_at, liberties, Group};
pub use pair::{BoardId, BoardPair};
pub use stone::Stone;
