//! Binding caller-supplied artwork to symbol ids.
//!
//! The generator never touches assets. Renderers need one distinct asset per
//! symbol, so a pool smaller than `V` has to be handled before rendering:
//! either rejected outright or padded with placeholders.

use tracing::warn;

use crate::design::{Card, SymbolId};
use crate::error::{DeckError, Result};

/// What to do when fewer assets than symbols are supplied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaddingPolicy {
    /// Fail with `InsufficientSymbols`.
    #[default]
    Reject,
    /// Leave the missing symbols unbound; renderers draw a placeholder.
    Placeholder,
}

/// Assets indexed by symbol id.
///
/// Symbol `s` is bound to the `s`-th supplied asset. Assets beyond the
/// symbol count are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolAssets<T> {
    slots: Vec<Option<T>>,
}

impl<T> SymbolAssets<T> {
    /// Bind `assets` to the first `symbol_count` symbols.
    pub fn bind(
        assets: impl IntoIterator<Item = T>,
        symbol_count: usize,
        policy: PaddingPolicy,
    ) -> Result<Self> {
        let mut slots: Vec<Option<T>> = assets.into_iter().take(symbol_count).map(Some).collect();
        let available = slots.len();

        if available < symbol_count {
            match policy {
                PaddingPolicy::Reject => {
                    return Err(DeckError::InsufficientSymbols {
                        required: symbol_count,
                        available,
                    });
                }
                PaddingPolicy::Placeholder => {
                    warn!(
                        required = symbol_count,
                        available, "padding symbol assets with placeholders"
                    );
                    slots.resize_with(symbol_count, || None);
                }
            }
        }

        Ok(Self { slots })
    }

    /// Asset bound to `symbol`, if any.
    #[must_use]
    pub fn get(&self, symbol: SymbolId) -> Option<&T> {
        self.slots.get(symbol.index()).and_then(Option::as_ref)
    }

    /// Assets for each symbol of `card`, in the card's symbol order.
    pub fn card_assets<'a>(&'a self, card: &'a Card) -> impl Iterator<Item = Option<&'a T>> + 'a {
        card.iter().map(move |symbol| self.get(symbol))
    }

    /// Number of symbols covered (bound or placeholder).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no symbols are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of placeholder symbols.
    #[must_use]
    pub fn missing(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }
}
