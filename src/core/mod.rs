//! Core utilities shared by design generation and deck assembly.
//!
//! Currently the seeded random stream and the free `shuffle` function.

pub mod rng;

pub use rng::{shuffle, DeckRng, SeedValue};
