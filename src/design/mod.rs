//! Design generation: orders, symbols, cards, and the projective plane.
//!
//! ## Key Types
//!
//! - `Order`: Validated prime order `q`
//! - `SymbolId` / `CardIndex`: Opaque identifiers
//! - `Card`: The `q + 1` symbols on one card
//! - `Design`: All `q² + q + 1` cards of the plane
//!
//! `generate_design` is the single entry point; it is pure and allocates
//! only the returned design.

pub mod generator;
pub mod order;
pub mod plane;
pub mod symbol;

pub use generator::{build_plane, generate_design};
pub use order::{is_prime, Order, MAX_ORDER};
pub use plane::Design;
pub use symbol::{Card, CardIndex, SymbolId};
