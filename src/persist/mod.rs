//! Persistence boundary.
//!
//! A `GameState` leaves the engine as a `Snapshot` (JSON or bincode) and
//! comes back only through `deserialize_state`, which checks every
//! structural invariant and rejects violations as `CorruptState`.

pub mod snapshot;
mod validate;

pub use snapshot::{deserialize_state, serialize_state, Snapshot};
