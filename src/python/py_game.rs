//! Game bindings for Python.

use pyo3::prelude::*;

use crate::board::BoardId;
use crate::core::{BoardSize, GameConfig, GameState, PlacementCommand, WinnerRule};
use crate::persist::{deserialize_state, serialize_state, Snapshot};
use crate::rules::QuantumEngine;
use crate::source::UniformSource;

use super::py_core::{coord, parse_color, to_py_err, PyBoardScore, PyStone};

/// Python wrapper for a quantum Go game.
#[pyclass(name = "QuantumGame")]
pub struct PyQuantumGame {
    engine: QuantumEngine,
    state: GameState,
}

#[pymethods]
impl PyQuantumGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - size: 9, 13 or 19 (anything else falls back to 19)
    /// - komi: added to black's winning threshold
    /// - unanimous: require both boards to agree on the winner
    #[new]
    #[pyo3(signature = (size = 19, komi = 7, unanimous = false))]
    fn new(size: i32, komi: u32, unanimous: bool) -> Self {
        let rule = if unanimous { WinnerRule::Unanimous } else { WinnerRule::Averaged };
        let config = GameConfig::new(BoardSize::normalize(size))
            .with_komi(komi)
            .with_winner_rule(rule);
        let engine = QuantumEngine::new();
        let state = engine.start(config);
        Self { engine, state }
    }

    /// Place a stone.
    ///
    /// Returns the positions removed from both boards.
    fn place(&mut self, x: u32, y: u32, color: &str) -> PyResult<Vec<(u8, u8)>> {
        let placement = PlacementCommand::new(coord(x, y)?, parse_color(color)?);
        let outcome = self
            .engine
            .submit_placement(&mut self.state, placement)
            .map_err(to_py_err)?;
        Ok(outcome.removed.iter().map(|c| (c.x, c.y)).collect())
    }

    /// Undo the last two placements.
    fn takeback(&mut self) -> PyResult<()> {
        self.engine.takeback(&mut self.state).map(|_| ()).map_err(to_py_err)
    }

    /// Positions where the color to play may place.
    fn legal_placements(&self) -> Vec<(u8, u8)> {
        self.engine
            .legal_placements(&self.state)
            .into_iter()
            .map(|c| (c.x, c.y))
            .collect()
    }

    /// Play one random legal placement. Returns False if none exists.
    fn play_random(&mut self, seed: u64) -> PyResult<bool> {
        let mut source = UniformSource::new(seed);
        let outcome = self
            .engine
            .play_from(&mut self.state, &mut source)
            .map_err(to_py_err)?;
        Ok(outcome.is_some())
    }

    /// Per-board scores, A then B.
    fn score(&self) -> (PyBoardScore, PyBoardScore) {
        let report = self.engine.current_score(&self.state);
        (PyBoardScore(report.boards.a), PyBoardScore(report.boards.b))
    }

    /// Match winner under the configured rule; None for a draw.
    fn winner(&self) -> Option<String> {
        self.engine.current_score(&self.state).winner.map(|c| c.to_string())
    }

    /// Score and end the game. Returns the winner.
    fn finish(&mut self) -> PyResult<Option<String>> {
        let report = self.engine.finish(&mut self.state).map_err(to_py_err)?;
        Ok(report.winner.map(|c| c.to_string()))
    }

    fn resign(&mut self, color: &str) -> PyResult<()> {
        let color = parse_color(color)?;
        self.engine.resign(&mut self.state, color).map_err(to_py_err)
    }

    /// Stones on one board ("a" or "b").
    fn stones(&self, board: &str) -> PyResult<Vec<PyStone>> {
        let id = match board.to_ascii_lowercase().as_str() {
            "a" => BoardId::A,
            "b" => BoardId::B,
            other => {
                return Err(pyo3::exceptions::PyValueError::new_err(format!("unknown board {other:?}")))
            }
        };
        Ok(self.state.boards()[id].stones().copied().map(PyStone).collect())
    }

    /// Color expected to place next, None once finished.
    #[getter]
    fn to_play(&self) -> Option<String> {
        self.state.to_play().map(|c| c.to_string())
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.state.moves()
    }

    #[getter]
    fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Serialize to a JSON snapshot.
    fn to_json(&self) -> PyResult<String> {
        serialize_state(&self.state).to_json().map_err(to_py_err)
    }

    /// Restore from a JSON snapshot.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let snapshot = Snapshot::from_json(json).map_err(to_py_err)?;
        let state = deserialize_state(snapshot).map_err(to_py_err)?;
        Ok(Self { engine: QuantumEngine::new(), state })
    }

    /// Copy the game.
    fn copy(&self) -> Self {
        Self { engine: self.engine, state: self.state.clone() }
    }

    fn __repr__(&self) -> String {
        let status = if self.state.is_finished() { "finished" } else { "ongoing" };
        format!(
            "QuantumGame(size={}, moves={}, phase={:?}, status={})",
            self.state.config().size,
            self.state.moves(),
            self.state.phase(),
            status
        )
    }
}
