//! Value type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::Stone;
use crate::core::{Color, Coord, EngineError};
use crate::scoring::BoardScore;

/// Convert an engine error into a Python `ValueError`.
pub(crate) fn to_py_err(err: EngineError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Parse a Python color string.
pub(crate) fn parse_color(color: &str) -> PyResult<Color> {
    color.parse::<Color>().map_err(PyValueError::new_err)
}

/// Build a coordinate, rejecting values that do not fit a board axis.
pub(crate) fn coord(x: u32, y: u32) -> PyResult<Coord> {
    match (u8::try_from(x), u8::try_from(y)) {
        (Ok(x), Ok(y)) => Ok(Coord::new(x, y)),
        _ => Err(PyValueError::new_err(format!("coordinate {x},{y} is off the board"))),
    }
}

/// Python view of a stone.
#[pyclass(name = "Stone")]
#[derive(Clone, Debug)]
pub struct PyStone(pub Stone);

#[pymethods]
impl PyStone {
    #[getter]
    fn position(&self) -> (u8, u8) {
        (self.0.position.x, self.0.position.y)
    }

    #[getter]
    fn color(&self) -> String {
        self.0.color.to_string()
    }

    /// Position of the entangled partner.
    #[getter]
    fn link(&self) -> (u8, u8) {
        (self.0.link.x, self.0.link.y)
    }

    fn is_entangled(&self) -> bool {
        self.0.is_entangled()
    }

    fn __repr__(&self) -> String {
        format!("Stone({}, {}, link={})", self.0.position, self.0.color, self.0.link)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Python view of one board's score.
#[pyclass(name = "BoardScore")]
#[derive(Clone, Debug)]
pub struct PyBoardScore(pub BoardScore);

#[pymethods]
impl PyBoardScore {
    #[getter]
    fn black(&self) -> u32 {
        self.0.total.black
    }

    #[getter]
    fn white(&self) -> u32 {
        self.0.total.white
    }

    #[getter]
    fn winner(&self) -> String {
        self.0.winner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "BoardScore(black={}, white={}, winner={})",
            self.0.total.black, self.0.total.white, self.0.winner
        )
    }
}
