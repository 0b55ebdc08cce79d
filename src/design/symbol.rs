//! Symbol and card types.
//!
//! ## Key Types
//!
//! - `SymbolId`: Opaque symbol identifier in `[0, V)`
//! - `CardIndex`: Position of a card within a design
//! - `Card`: The `K` distinct symbols printed on one card

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Identifier for a symbol (a point of the plane).
///
/// Symbols carry no meaning of their own. Mapping them to artwork is up to
/// the consumer, see [`crate::deck::SymbolAssets`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the symbol as a `usize` index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Position of a card within a design or deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardIndex(pub u32);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the index as a `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One card: a set of distinct symbols (a line of the plane).
///
/// Symbols are kept in construction order so output is reproducible, but
/// that order has no meaning. Cards up to order 7 (eight symbols) stay
/// inline without a heap allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(SmallVec<[SymbolId; 8]>);

impl Card {
    /// Build a card from symbols in the given order.
    pub fn from_symbols(symbols: impl IntoIterator<Item = SymbolId>) -> Self {
        Self(symbols.into_iter().collect())
    }

    /// The card's symbols.
    #[must_use]
    pub fn symbols(&self) -> &[SymbolId] {
        &self.0
    }

    /// Mutable access for reordering within the card.
    pub(crate) fn symbols_mut(&mut self) -> &mut [SymbolId] {
        &mut self.0
    }

    /// Number of symbols on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the card has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `symbol` appears on this card.
    #[must_use]
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.0.contains(&symbol)
    }

    /// Iterate over the card's symbols.
    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.0.iter().copied()
    }

    /// Symbols that appear on both cards.
    ///
    /// For two distinct cards of a valid design this yields exactly one
    /// symbol.
    pub fn common_symbols<'a>(&'a self, other: &'a Card) -> impl Iterator<Item = SymbolId> + 'a {
        self.iter().filter(move |s| other.contains(*s))
    }

    /// Copy of this card with every symbol replaced through `mapping`.
    ///
    /// `mapping[s]` is the new label for symbol `s`; the mapping must cover
    /// the whole symbol pool, so only deck assembly calls this.
    #[must_use]
    pub(crate) fn relabelled(&self, mapping: &[SymbolId]) -> Self {
        Self(self.0.iter().map(|s| mapping[s.index()]).collect())
    }
}

impl<'a> IntoIterator for &'a Card {
    type Item = &'a SymbolId;
    type IntoIter = std::slice::Iter<'a, SymbolId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
