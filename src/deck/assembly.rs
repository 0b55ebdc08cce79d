//! Turning a design into a shuffled, optionally truncated deck.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::config::DeckConfig;
use crate::core::{DeckRng, SeedValue};
use crate::design::plane::check_cards;
use crate::design::{build_plane, Card, CardIndex, Order, SymbolId};
use crate::error::{DeckError, Result};

/// A deck ready for a renderer: the design's cards after relabelling,
/// shuffling, and truncation.
///
/// Every stage preserves the pairing property, so any two cards of a deck
/// still share exactly one symbol. A truncated deck keeps the full symbol
/// pool size; some symbols may just not appear.
///
/// ```
/// use spot_deck::deck::{Deck, DeckConfig};
///
/// let deck = Deck::build(&DeckConfig::new(7).with_seed("party").with_card_limit(55)).unwrap();
/// assert_eq!(deck.len(), 55);
/// assert_eq!(deck.symbols_per_card(), 8);
/// ```
///
/// Deserializing re-checks the cards: at most `V` of them, each with `K`
/// distinct symbols from `[0, V)`, any two sharing exactly one symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckRepr")]
pub struct Deck {
    order: Order,
    seed: SeedValue,
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from the given settings.
    ///
    /// Each shuffle stage draws from its own stream derived from the seed,
    /// so turning one stage off leaves the others unchanged.
    pub fn build(config: &DeckConfig) -> Result<Self> {
        let order = config.validate()?;
        let mut cards = build_plane(order)?.into_cards();
        let rng = DeckRng::new(config.seed.clone());

        if config.relabel_symbols {
            let mut mapping: Vec<SymbolId> =
                (0..order.symbol_count() as u32).map(SymbolId).collect();
            rng.for_context("relabel").shuffle_in_place(&mut mapping);
            cards = cards.iter().map(|card| card.relabelled(&mapping)).collect();
            trace!(seed = %config.seed, "symbols relabelled");
        }

        if config.shuffle_cards {
            rng.for_context("cards").shuffle_in_place(&mut cards);
        }

        if config.shuffle_symbols {
            let mut symbol_rng = rng.for_context("symbols");
            for card in &mut cards {
                symbol_rng.shuffle_in_place(card.symbols_mut());
            }
        }

        if let Some(limit) = config.card_limit {
            cards.truncate(limit);
        }

        debug!(
            order = order.get(),
            seed = %config.seed,
            cards = cards.len(),
            "built deck"
        );

        Ok(Self {
            order,
            seed: config.seed.clone(),
            cards,
        })
    }

    /// Order of the underlying design.
    #[must_use]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Seed the deck was shuffled with.
    #[must_use]
    pub fn seed(&self) -> &SeedValue {
        &self.seed
    }

    /// Size of the symbol pool, `V`. Assets must cover this many symbols.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.order.symbol_count()
    }

    /// Symbols on each card, `K`.
    #[must_use]
    pub fn symbols_per_card(&self) -> usize {
        self.order.symbols_per_card()
    }

    /// Cards in presentation order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get a card by position.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.index())
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The symbol two distinct cards of this deck have in common.
    #[must_use]
    pub fn shared_symbol(&self, a: CardIndex, b: CardIndex) -> Option<SymbolId> {
        if a == b {
            return None;
        }
        let (card_a, card_b) = (self.card(a)?, self.card(b)?);
        card_a.common_symbols(card_b).next()
    }

    /// Consume the deck, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Unchecked wire form of a [`Deck`].
#[derive(Deserialize)]
struct DeckRepr {
    order: Order,
    seed: SeedValue,
    cards: Vec<Card>,
}

impl TryFrom<DeckRepr> for Deck {
    type Error = DeckError;

    fn try_from(repr: DeckRepr) -> Result<Self> {
        let available = repr.order.symbol_count();
        if repr.cards.len() > available {
            return Err(DeckError::CardLimitExceeded {
                requested: repr.cards.len(),
                available,
            });
        }
        check_cards(repr.order, &repr.cards)?;

        Ok(Self {
            order: repr.order,
            seed: repr.seed,
            cards: repr.cards,
        })
    }
}
