//! Projective-plane construction.
//!
//! The plane of prime order `q` is built from the affine plane over
//! `Z/qZ` plus a line at infinity:
//!
//! - Affine point `(x, y)` is symbol `x*q + y`.
//! - Slope `m` has the direction symbol `q*q + m`; vertical lines share
//!   `q*q + q`.
//! - Line `y = m*x + b` is a card of its `q` points plus direction `m`.
//! - Line `x = a` is a card of its `q` points plus the vertical direction.
//! - The line at infinity is the card of all `q + 1` direction symbols.
//!
//! Parallel affine lines meet only at their shared direction symbol, and the
//! line at infinity meets every other card at exactly that symbol, which is
//! what makes any two cards share exactly one symbol.

use std::iter;

use tracing::{debug, trace};

use super::order::Order;
use super::plane::Design;
use super::symbol::{Card, SymbolId};
use crate::error::Result;

/// Generate the design for order `q`.
///
/// Fails with [`crate::DeckError::InvalidOrder`] unless `q` is a prime
/// `>= 2`. Nothing is built for a rejected order.
///
/// ```
/// use spot_deck::generate_design;
///
/// let fano = generate_design(2).unwrap();
/// assert_eq!(fano.symbol_count(), 7);
/// assert_eq!(fano.symbols_per_card(), 3);
/// assert_eq!(fano.cards().len(), 7);
///
/// assert!(generate_design(4).is_err());
/// ```
pub fn generate_design(order: u32) -> Result<Design> {
    build_plane(Order::new(order)?)
}

/// Build the design for an already validated order.
pub fn build_plane(order: Order) -> Result<Design> {
    let q = order.get();
    let point = |x: u32, y: u32| SymbolId(x * q + y);
    let direction = |m: u32| SymbolId(q * q + m);
    let vertical = SymbolId(q * q + q);

    let mut cards = Vec::with_capacity(order.symbol_count());

    for m in 0..q {
        for b in 0..q {
            let line = (0..q).map(|x| point(x, (m * x + b) % q));
            cards.push(Card::from_symbols(line.chain(iter::once(direction(m)))));
        }
    }
    trace!(order = q, cards = cards.len(), "sloped lines built");

    for a in 0..q {
        let line = (0..q).map(|y| point(a, y));
        cards.push(Card::from_symbols(line.chain(iter::once(vertical))));
    }
    trace!(order = q, cards = cards.len(), "vertical lines built");

    cards.push(Card::from_symbols((0..=q).map(direction)));

    let design = Design::from_cards(order, cards)?;
    debug!(
        order = q,
        symbols = design.symbol_count(),
        symbols_per_card = design.symbols_per_card(),
        "generated design"
    );
    Ok(design)
}
