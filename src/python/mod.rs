//! Python bindings for the quantum Go engine.
//!
//! Built with the `python` feature.
//!
//! # Quick Start
//!
//! ```python
//! import quantum_go as qg
//!
//! game = qg.QuantumGame(size=9)
//! game.place(3, 3, "black")
//! game.place(3, 5, "white")
//!
//! score = game.score()
//! snapshot = game.to_json()
//! restored = qg.QuantumGame.from_json(snapshot)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// quantum_go: dual-board quantum Go rules engine.
#[pymodule]
fn quantum_go(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyStone>()?;
    m.add_class::<PyBoardScore>()?;
    m.add_class::<PyQuantumGame>()?;
    Ok(())
}
