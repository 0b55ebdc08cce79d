//! Deck assembly configuration.

use serde::{Deserialize, Serialize};

use crate::core::SeedValue;
use crate::design::Order;
use crate::error::{DeckError, Result};

/// Settings for turning a design into a presentation-ready deck.
///
/// Missing fields fall back to [`DeckConfig::default`] when deserializing,
/// so a config file may hold only what it changes:
///
/// ```
/// use spot_deck::deck::DeckConfig;
///
/// let config: DeckConfig = serde_json::from_str(r#"{ "order": 5, "seed": "party" }"#).unwrap();
/// assert_eq!(config.order, 5);
/// assert!(config.shuffle_cards);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Projective-plane order `q`; must be prime.
    /// Order 7 gives the familiar 57-card, 8-symbol deck.
    pub order: u32,

    /// Seed for every shuffle stage.
    /// Same seed and settings produce an identical deck.
    pub seed: SeedValue,

    /// Keep only the first `n` cards after shuffling (`None` = all).
    pub card_limit: Option<usize>,

    /// Shuffle the order of the cards.
    pub shuffle_cards: bool,

    /// Shuffle the order of symbols within each card.
    pub shuffle_symbols: bool,

    /// Apply a seeded permutation to symbol ids, so the same order yields
    /// differently labelled decks for different seeds.
    pub relabel_symbols: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            order: 7,
            seed: SeedValue::default(),
            card_limit: None,
            shuffle_cards: true,
            shuffle_symbols: true,
            relabel_symbols: false,
        }
    }
}

impl DeckConfig {
    /// Create a config for the given order with default settings.
    pub fn new(order: u32) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Set the order.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: impl Into<SeedValue>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Keep at most `limit` cards.
    #[must_use]
    pub fn with_card_limit(mut self, limit: usize) -> Self {
        self.card_limit = Some(limit);
        self
    }

    /// Disable both card and symbol shuffling.
    #[must_use]
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle_cards = false;
        self.shuffle_symbols = false;
        self
    }

    /// Enable seeded symbol relabelling.
    #[must_use]
    pub fn with_relabelling(mut self) -> Self {
        self.relabel_symbols = true;
        self
    }

    /// Check the settings, returning the validated order.
    ///
    /// Fails with `InvalidOrder` for a non-prime order, `InvalidConfig` for a
    /// zero card limit, and `CardLimitExceeded` when the limit is larger than
    /// the design.
    pub fn validate(&self) -> Result<Order> {
        let order = Order::new(self.order)?;
        match self.card_limit {
            Some(0) => Err(DeckError::InvalidConfig {
                reason: "card_limit must be at least 1".to_string(),
            }),
            Some(limit) if limit > order.symbol_count() => Err(DeckError::CardLimitExceeded {
                requested: limit,
                available: order.symbol_count(),
            }),
            _ => Ok(order),
        }
    }
}
