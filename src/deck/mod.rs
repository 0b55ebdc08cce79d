//! Deck assembly: everything between a design and a renderer.
//!
//! ## Key Types
//!
//! - `DeckConfig`: Order, seed, card limit, shuffle toggles
//! - `Deck`: Relabelled, shuffled, truncated cards
//! - `SymbolAssets`: Caller artwork bound to symbol ids
//!
//! Nothing here changes which cards pair up; it only changes labels,
//! ordering, and how many cards are kept.

pub mod assembly;
pub mod assets;
pub mod config;

pub use assembly::Deck;
pub use assets::{PaddingPolicy, SymbolAssets};
pub use config::DeckConfig;
