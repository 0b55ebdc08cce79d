//! Design and shuffle bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::shuffle;
use crate::design::{generate_design, is_prime, CardIndex, Design};

use super::PySeed;

/// Python wrapper for Design.
#[pyclass(name = "Design")]
#[derive(Clone, Debug)]
pub struct PyDesign(pub Design);

#[pymethods]
impl PyDesign {
    /// Generate the design for a prime order.
    #[new]
    fn new(order: u32) -> PyResult<Self> {
        Ok(Self(generate_design(order)?))
    }

    /// Projective-plane order q.
    #[getter]
    fn order(&self) -> u32 {
        self.0.order().get()
    }

    /// Number of distinct symbols (q² + q + 1).
    #[getter]
    fn symbol_count(&self) -> usize {
        self.0.symbol_count()
    }

    /// Symbols on each card (q + 1).
    #[getter]
    fn symbols_per_card(&self) -> usize {
        self.0.symbols_per_card()
    }

    /// All cards as lists of symbol ids.
    fn cards(&self) -> Vec<Vec<u32>> {
        self.0
            .iter()
            .map(|card| card.iter().map(|s| s.0).collect())
            .collect()
    }

    /// The symbol shared by cards `a` and `b`, or None.
    fn shared_symbol(&self, a: u32, b: u32) -> Option<u32> {
        self.0.shared_symbol(CardIndex(a), CardIndex(b)).map(|s| s.0)
    }

    /// Run the full pairwise self-check; raises ValueError on failure.
    fn verify(&self) -> PyResult<()> {
        Ok(self.0.verify()?)
    }

    /// Card × symbol incidence matrix as a uint8 numpy array.
    fn incidence_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let rows = self.0.len();
        let cols = self.0.symbol_count();
        let flat: Vec<u8> = self.0.incidence_matrix().into_iter().flatten().collect();

        PyArray1::from_vec_bound(py, flat)
            .reshape([rows, cols])
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Design(order={}, symbols={}, per_card={})",
            self.0.order().get(),
            self.0.symbol_count(),
            self.0.symbols_per_card()
        )
    }
}

/// Generate the design for a prime order.
#[pyfunction]
#[pyo3(name = "generate_design")]
pub fn py_generate_design(order: u32) -> PyResult<PyDesign> {
    Ok(PyDesign(generate_design(order)?))
}

/// Return `items` in a seeded, reproducible order.
#[pyfunction]
#[pyo3(name = "shuffle")]
pub fn py_shuffle(items: Vec<PyObject>, seed: PySeed) -> Vec<PyObject> {
    shuffle(items, seed)
}

/// Whether `n` is a valid (prime) order.
#[pyfunction]
#[pyo3(name = "is_prime")]
pub fn py_is_prime(n: u32) -> bool {
    is_prime(n)
}
