//! Deck bindings for Python.

use pyo3::prelude::*;

use crate::deck::{Deck, DeckConfig};
use crate::design::CardIndex;

use super::PySeed;

/// Python wrapper for Deck.
///
/// A seeded, shuffled, optionally truncated deck.
#[pyclass(name = "Deck")]
#[derive(Clone, Debug)]
pub struct PyDeck(pub Deck);

#[pymethods]
impl PyDeck {
    /// Build a deck.
    ///
    /// # Arguments
    /// - order: Prime projective-plane order (7 → 57 cards of 8)
    /// - seed: int or str; same seed gives the same deck
    /// - card_limit: Keep only this many cards
    /// - shuffle_cards: Shuffle card order
    /// - shuffle_symbols: Shuffle symbol order within each card
    /// - relabel_symbols: Apply a seeded permutation to symbol ids
    #[new]
    #[pyo3(signature = (
        order = 7,
        seed = None,
        card_limit = None,
        shuffle_cards = true,
        shuffle_symbols = true,
        relabel_symbols = false
    ))]
    fn new(
        order: u32,
        seed: Option<PySeed>,
        card_limit: Option<usize>,
        shuffle_cards: bool,
        shuffle_symbols: bool,
        relabel_symbols: bool,
    ) -> PyResult<Self> {
        let config = DeckConfig {
            order,
            seed: seed.map(Into::into).unwrap_or_default(),
            card_limit,
            shuffle_cards,
            shuffle_symbols,
            relabel_symbols,
        };
        Ok(Self(Deck::build(&config)?))
    }

    /// Number of distinct symbols the renderer needs assets for.
    #[getter]
    fn symbol_count(&self) -> usize {
        self.0.symbol_count()
    }

    /// Symbols on each card.
    #[getter]
    fn symbols_per_card(&self) -> usize {
        self.0.symbols_per_card()
    }

    /// Cards in presentation order as lists of symbol ids.
    fn cards(&self) -> Vec<Vec<u32>> {
        self.0
            .cards()
            .iter()
            .map(|card| card.iter().map(|s| s.0).collect())
            .collect()
    }

    /// The symbol shared by cards `a` and `b`, or None.
    fn shared_symbol(&self, a: u32, b: u32) -> Option<u32> {
        self.0.shared_symbol(CardIndex(a), CardIndex(b)).map(|s| s.0)
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Deck(order={}, cards={}, seed={})",
            self.0.order().get(),
            self.0.len(),
            self.0.seed()
        )
    }
}
