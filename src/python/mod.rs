//! Python bindings for spot-deck.
//!
//! # Quick Start
//!
//! ```python
//! import spot_deck as sd
//!
//! design = sd.generate_design(7)
//! assert design.symbol_count == 57
//!
//! deck = sd.Deck(order=7, seed="party", card_limit=55)
//! for card in deck.cards():
//!     render(card)
//!
//! order = sd.shuffle(["a", "b", "c", "d"], seed=42)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::SeedValue;
use crate::error::DeckError;

mod py_deck;
mod py_design;

pub use py_deck::*;
pub use py_design::*;

impl From<DeckError> for PyErr {
    fn from(err: DeckError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Seed accepted from Python: an int (negative allowed) or a str.
#[derive(FromPyObject, Clone, Debug)]
pub enum PySeed {
    /// Non-negative integer.
    Int(u64),
    /// Negative integer, kept by bit pattern.
    Signed(i64),
    /// Free-form string.
    Text(String),
}

impl From<PySeed> for SeedValue {
    fn from(seed: PySeed) -> Self {
        match seed {
            PySeed::Int(n) => SeedValue::Int(n),
            PySeed::Signed(n) => SeedValue::from(n),
            PySeed::Text(text) => SeedValue::Text(text),
        }
    }
}

/// spot-deck: projective-plane symbol decks.
///
/// This module provides:
/// - `generate_design(order)` and the `Design` class
/// - `Deck` for seeded, shuffled, truncated decks
/// - `shuffle(items, seed)` for reproducible ordering
#[pymodule]
fn spot_deck(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDesign>()?;
    m.add_class::<PyDeck>()?;

    m.add_function(wrap_pyfunction!(py_generate_design, m)?)?;
    m.add_function(wrap_pyfunction!(py_shuffle, m)?)?;
    m.add_function(wrap_pyfunction!(py_is_prime, m)?)?;

    Ok(())
}
