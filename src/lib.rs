//! # spot-deck
//!
//! Deterministic generator for "spot the match" symbol decks: every card
//! holds the same number of symbols, and any two cards share exactly one.
//!
//! ## Design Principles
//!
//! 1. **One Parameter**: A deck is fully determined by its prime order `q`.
//!    `q` gives `q² + q + 1` symbols and as many cards, each of `q + 1`
//!    symbols (order 7 → the classic 57-card deck of 8).
//!
//! 2. **Pure Functions**: Generation and shuffling have no global state, no
//!    I/O, and no hidden randomness. Same inputs, same output.
//!
//! 3. **Randomness Only For Presentation**: Seeded shuffles change labels and
//!    ordering, never which cards pair up.
//!
//! ## Architecture
//!
//! - **Finite Projective Plane**: Cards are the lines of the plane of order
//!   `q`, symbols are its points. Built from the affine plane over `Z/qZ`
//!   plus a line at infinity.
//!
//! - **Seeded Fisher–Yates**: Integer or string seeds expand into a ChaCha8
//!   stream; independent context streams per shuffle stage.
//!
//! ## Modules
//!
//! - `design`: Orders, symbols, cards, and plane generation
//! - `core`: Seeded RNG and `shuffle`
//! - `deck`: Deck configuration, assembly, and asset binding
//! - `error`: `DeckError`
//!
//! ## Features
//!
//! None are on by default. `python` builds the PyO3 module; `cli` builds the
//! `spot-deck` binary (`cargo run --features cli -- generate --order 7`).

pub mod core;
pub mod deck;
pub mod design;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{shuffle, DeckRng, SeedValue};

pub use crate::design::{
    build_plane, generate_design, is_prime, Card, CardIndex, Design, Order, SymbolId, MAX_ORDER,
};

pub use crate::deck::{Deck, DeckConfig, PaddingPolicy, SymbolAssets};

pub use crate::error::{DeckError, Result};
