//! The `Design` type: a complete projective plane as a deck of cards.

use serde::{Deserialize, Serialize};

use super::order::Order;
use super::symbol::{Card, CardIndex, SymbolId};
use crate::error::{DeckError, Result};

/// A complete symbol design for one order.
///
/// Holds `V = q² + q + 1` cards of `K = q + 1` symbols each, drawn from the
/// symbol pool `[0, V)`. Any two distinct cards share exactly one symbol and
/// every symbol appears on exactly `K` cards.
///
/// A `Design` is immutable once built. The only constructors check the card
/// count and card sizes, so a value of this type always has the right shape;
/// [`Design::verify`] runs the full pairwise check on top of that.
///
/// Serializes as `{ order, symbol_count, symbols_per_card, cards }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DesignRepr", try_from = "DesignRepr")]
pub struct Design {
    order: Order,
    cards: Vec<Card>,
}

impl Design {
    /// Wrap constructed cards, checking count and card sizes.
    ///
    /// Fails with [`DeckError::MalformedDesign`] if there are not exactly
    /// `V` cards or any card does not hold exactly `K` symbols.
    pub fn from_cards(order: Order, cards: Vec<Card>) -> Result<Self> {
        let expected_cards = order.symbol_count();
        if cards.len() != expected_cards {
            return Err(DeckError::malformed(format!(
                "expected {expected_cards} cards for {order}, found {}",
                cards.len()
            )));
        }

        let k = order.symbols_per_card();
        if let Some((i, card)) = cards.iter().enumerate().find(|(_, c)| c.len() != k) {
            return Err(DeckError::malformed(format!(
                "card {i} has {} symbols, expected {k}",
                card.len()
            )));
        }

        Ok(Self { order, cards })
    }

    /// The order this design was built from.
    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Number of distinct symbols, `V`.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.order.symbol_count()
    }

    /// Number of symbols on each card, `K`.
    #[must_use]
    pub fn symbols_per_card(&self) -> usize {
        self.order.symbols_per_card()
    }

    /// All cards in construction order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get a card by index.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.index())
    }

    /// Number of cards (always equal to [`Design::symbol_count`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the design has no cards. Never true for a built design.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Consume the design, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// The one symbol cards `a` and `b` have in common.
    ///
    /// Returns `None` when `a == b` or either index is out of range.
    #[must_use]
    pub fn shared_symbol(&self, a: CardIndex, b: CardIndex) -> Option<SymbolId> {
        if a == b {
            return None;
        }
        let (card_a, card_b) = (self.card(a)?, self.card(b)?);
        card_a.common_symbols(card_b).next()
    }

    /// Indices of the cards carrying `symbol`.
    pub fn cards_with_symbol(&self, symbol: SymbolId) -> impl Iterator<Item = CardIndex> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(move |(_, card)| card.contains(symbol))
            .map(|(i, _)| CardIndex(i as u32))
    }

    /// How many cards each symbol appears on, indexed by symbol id.
    ///
    /// Symbols outside `[0, V)` are ignored.
    #[must_use]
    pub fn symbol_frequencies(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.symbol_count()];
        for symbol in self.cards.iter().flat_map(Card::iter) {
            if let Some(count) = counts.get_mut(symbol.index()) {
                *count += 1;
            }
        }
        counts
    }

    /// Card × symbol incidence matrix: `m[card][symbol]` is 1 when the
    /// symbol is on the card, 0 otherwise.
    #[must_use]
    pub fn incidence_matrix(&self) -> Vec<Vec<u8>> {
        let v = self.symbol_count();
        self.cards
            .iter()
            .map(|card| {
                let mut row = vec![0u8; v];
                for symbol in card.iter() {
                    if let Some(cell) = row.get_mut(symbol.index()) {
                        *cell = 1;
                    }
                }
                row
            })
            .collect()
    }

    /// Full structural self-check.
    ///
    /// Checks card count and sizes, symbol range, distinct symbols within
    /// each card, that every pair of distinct cards shares exactly one
    /// symbol, and that every symbol appears on exactly `K` cards.
    ///
    /// Runs in `O(V² K)`; cheap for the orders decks are printed with, slow
    /// for large ones.
    pub fn verify(&self) -> Result<()> {
        let v = self.symbol_count();
        let k = self.symbols_per_card();

        if self.cards.len() != v {
            return Err(DeckError::malformed(format!(
                "expected {v} cards, found {}",
                self.cards.len()
            )));
        }

        check_cards(self.order, &self.cards)?;

        if let Some((symbol, count)) = self
            .symbol_frequencies()
            .into_iter()
            .enumerate()
            .find(|&(_, count)| count != k)
        {
            return Err(DeckError::malformed(format!(
                "symbol {symbol} appears on {count} cards, expected {k}"
            )));
        }

        Ok(())
    }
}

/// Card-level checks shared by [`Design::verify`] and deck deserialization.
///
/// Every card must hold exactly `K` distinct symbols from `[0, V)`, and every
/// pair of cards must share exactly one symbol. The card count is left to
/// the caller, since a deck may be a truncated design.
pub(crate) fn check_cards(order: Order, cards: &[Card]) -> Result<()> {
    let v = order.symbol_count();
    let k = order.symbols_per_card();

    let mut marks = vec![false; v];
    for (i, card) in cards.iter().enumerate() {
        if card.len() != k {
            return Err(DeckError::malformed(format!(
                "card {i} has {} symbols, expected {k}",
                card.len()
            )));
        }
        marks.iter_mut().for_each(|m| *m = false);
        for symbol in card.iter() {
            let slot = marks.get_mut(symbol.index()).ok_or_else(|| {
                DeckError::malformed(format!("card {i} holds out-of-range {symbol}"))
            })?;
            if *slot {
                return Err(DeckError::malformed(format!("card {i} repeats {symbol}")));
            }
            *slot = true;
        }
    }

    for (i, a) in cards.iter().enumerate() {
        marks.iter_mut().for_each(|m| *m = false);
        for symbol in a.iter() {
            marks[symbol.index()] = true;
        }
        for (j, b) in cards.iter().enumerate().skip(i + 1) {
            let shared = b.iter().filter(|s| marks[s.index()]).count();
            if shared != 1 {
                return Err(DeckError::malformed(format!(
                    "cards {i} and {j} share {shared} symbols"
                )));
            }
        }
    }

    Ok(())
}

impl<'a> IntoIterator for &'a Design {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Serialized shape of a [`Design`].
///
/// `symbol_count` and `symbols_per_card` are redundant with `order` but are
/// what consumers read; they are checked on the way back in.
#[derive(Serialize, Deserialize)]
struct DesignRepr {
    order: Order,
    symbol_count: usize,
    symbols_per_card: usize,
    cards: Vec<Card>,
}

impl From<Design> for DesignRepr {
    fn from(design: Design) -> Self {
        Self {
            order: design.order,
            symbol_count: design.symbol_count(),
            symbols_per_card: design.symbols_per_card(),
            cards: design.cards,
        }
    }
}

impl TryFrom<DesignRepr> for Design {
    type Error = DeckError;

    fn try_from(repr: DesignRepr) -> Result<Self> {
        if repr.symbol_count != repr.order.symbol_count()
            || repr.symbols_per_card != repr.order.symbols_per_card()
        {
            return Err(DeckError::malformed(format!(
                "counts ({}, {}) do not match {}",
                repr.symbol_count, repr.symbols_per_card, repr.order
            )));
        }
        Design::from_cards(repr.order, repr.cards)
    }
}
