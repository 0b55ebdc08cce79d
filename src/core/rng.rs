//! Deterministic seeded shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Flexible seeds**: Integers and strings both expand to a stream
//! - **Context streams**: Independent sequences for different purposes
//!
//! The generator is ChaCha8, which is far stronger than a presentation
//! shuffle needs. Nothing here is meant to be unpredictable; only
//! reproducibility is promised.
//!
//! ```
//! use spot_deck::core::{shuffle, DeckRng};
//!
//! let a = shuffle(vec![1, 2, 3, 4, 5], "party");
//! let b = shuffle(vec![1, 2, 3, 4, 5], "party");
//! assert_eq!(a, b);
//!
//! // Separate streams for separate jobs
//! let rng = DeckRng::new(42);
//! let mut cards = rng.for_context("cards");
//! let mut symbols = rng.for_context("symbols");
//! assert_ne!(cards.seed(), symbols.seed());
//! # let _ = (cards.gen_range_usize(0..10), symbols.gen_range_usize(0..10));
//! ```

use std::hash::Hasher;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};

/// A shuffle seed: either a number or a free-form string.
///
/// Serializes untagged, so configs may write `"seed": 7`, `"seed": -7` or
/// `"seed": "birthday"`. Negative integers keep their two's-complement bit
/// pattern, the same mapping `From<i64>` uses.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SeedRepr", into = "SeedRepr")]
pub enum SeedValue {
    /// Numeric seed, used as-is.
    Int(u64),
    /// Text seed, hashed into a numeric seed.
    Text(String),
}

/// Wire form of a [`SeedValue`]; accepts signed integers on the way in.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SeedRepr {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl From<SeedRepr> for SeedValue {
    fn from(repr: SeedRepr) -> Self {
        match repr {
            SeedRepr::Unsigned(n) => Self::Int(n),
            SeedRepr::Signed(n) => Self::from(n),
            SeedRepr::Text(text) => Self::Text(text),
        }
    }
}

impl From<SeedValue> for SeedRepr {
    fn from(seed: SeedValue) -> Self {
        match seed {
            SeedValue::Int(n) => Self::Unsigned(n),
            SeedValue::Text(text) => Self::Text(text),
        }
    }
}

impl SeedValue {
    /// Expand this seed into the 64-bit value the stream is keyed with.
    ///
    /// Text seeds go through `FxHasher`, which has no per-process random
    /// state, so the same string always maps to the same stream.
    #[must_use]
    pub fn expand(&self) -> u64 {
        match self {
            Self::Int(n) => *n,
            Self::Text(text) => {
                let mut hasher = FxHasher::default();
                hasher.write(text.as_bytes());
                hasher.write_usize(text.len());
                hasher.finish()
            }
        }
    }
}

impl Default for SeedValue {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl std::fmt::Display for SeedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<u64> for SeedValue {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for SeedValue {
    fn from(value: u32) -> Self {
        Self::Int(u64::from(value))
    }
}

impl From<i64> for SeedValue {
    fn from(value: i64) -> Self {
        // Negative seeds keep their bit pattern.
        Self::Int(value as u64)
    }
}

impl From<i32> for SeedValue {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

/// Parse a seed typed as text, e.g. on a command line.
///
/// Only the canonical spelling of an integer becomes [`SeedValue::Int`]:
/// `"42"` and `"-1"` are numbers, while `"007"` and `"+5"` stay text, so a
/// seed means the same thing here as in a JSON config.
impl std::str::FromStr for SeedValue {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = raw.parse::<u64>() {
            if n.to_string() == raw {
                return Ok(Self::Int(n));
            }
        }
        if let Ok(n) = raw.parse::<i64>() {
            if n.to_string() == raw {
                return Ok(Self::from(n));
            }
        }
        Ok(Self::Text(raw.to_owned()))
    }
}

impl From<&str> for SeedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SeedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Seeded random stream used for every shuffle in the crate.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG from any seed value.
    #[must_use]
    pub fn new(seed: impl Into<SeedValue>) -> Self {
        Self::from_expanded(seed.into().expand())
    }

    fn from_expanded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The expanded seed this stream was keyed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// regardless of how far this stream has advanced.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        hasher.write_usize(context.len());
        Self::from_expanded(hasher.finish())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let index = self.inner.gen_range(0..slice.len());
        slice.get(index)
    }

    /// Fisher–Yates shuffle of a slice in place.
    ///
    /// Walks from the last index down to 1, swapping position `i` with a
    /// uniform position in `[0, i]`.
    pub fn shuffle_in_place<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.inner.gen_range(0..=i);
            slice.swap(i, j);
        }
    }
}

/// Return `items` in a seeded, reproducible order.
///
/// Pure function of `(items, seed)`: the same seed and input length always
/// give the same permutation.
#[must_use]
pub fn shuffle<T>(mut items: Vec<T>, seed: impl Into<SeedValue>) -> Vec<T> {
    DeckRng::new(seed).shuffle_in_place(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = DeckRng::new(42u64);
        let mut rng2 = DeckRng::new(42u64);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DeckRng::new(1u64);
        let mut rng2 = DeckRng::new(2u64);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_text_seed_is_stable() {
        assert_eq!(
            SeedValue::from("dobble night").expand(),
            SeedValue::from("dobble night".to_string()).expand()
        );
        assert_ne!(
            SeedValue::from("dobble night").expand(),
            SeedValue::from("dobble nights").expand()
        );
    }

    #[test]
    fn test_int_seed_used_as_is() {
        assert_eq!(SeedValue::from(7u32).expand(), 7);
        assert_eq!(DeckRng::new(7u64).seed(), 7);
        assert_eq!(SeedValue::from(-1).expand(), u64::MAX);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = DeckRng::new(42u64);
        let mut ctx1 = rng.for_context("cards");
        let mut ctx2 = rng.for_context("symbols");

        let seq1: Vec<_> = (0..10).map(|_| ctx1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| ctx2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_ignores_stream_position() {
        let fresh = DeckRng::new(42u64);
        let mut advanced = DeckRng::new(42u64);
        for _ in 0..50 {
            advanced.gen_range_usize(0..10);
        }

        let mut ctx1 = fresh.for_context("test");
        let mut ctx2 = advanced.for_context("test");

        for _ in 0..10 {
            assert_eq!(ctx1.gen_range_usize(0..1000), ctx2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_shuffle_in_place() {
        let mut rng = DeckRng::new(42u64);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle_in_place(&mut data);

        // Should be same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let empty: Vec<u8> = shuffle(Vec::new(), 3u64);
        assert!(empty.is_empty());

        assert_eq!(shuffle(vec!['x'], 3u64), vec!['x']);
    }

    #[test]
    fn test_choose() {
        let mut rng = DeckRng::new(42u64);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some_and(|c| items.contains(c)));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_gen_bool_extremes() {
        let mut rng = DeckRng::new(9u64);
        for _ in 0..20 {
            assert!(rng.gen_bool(1.0));
            assert!(!rng.gen_bool(0.0));
        }
    }

    #[test]
    fn test_seed_serde() {
        let int: SeedValue = serde_json::from_str("42").unwrap();
        assert_eq!(int, SeedValue::Int(42));

        let text: SeedValue = serde_json::from_str("\"party\"").unwrap();
        assert_eq!(text, SeedValue::Text("party".to_string()));

        assert_eq!(serde_json::to_string(&SeedValue::Int(5)).unwrap(), "5");
    }

    #[test]
    fn test_negative_seed_serde() {
        let negative: SeedValue = serde_json::from_str("-1").unwrap();
        assert_eq!(negative, SeedValue::from(-1i64));
        assert_eq!(negative, SeedValue::Int(u64::MAX));

        let json = serde_json::to_string(&negative).unwrap();
        assert_eq!(json, "18446744073709551615");
        assert_eq!(serde_json::from_str::<SeedValue>(&json).unwrap(), negative);
    }

    #[test]
    fn test_parse_from_text() {
        let parse = |raw: &str| raw.parse::<SeedValue>().unwrap();

        assert_eq!(parse("42"), SeedValue::Int(42));
        assert_eq!(parse("-1"), SeedValue::from(-1i32));
        assert_eq!(parse("18446744073709551615"), SeedValue::Int(u64::MAX));
        assert_eq!(parse("007"), SeedValue::Text("007".to_string()));
        assert_eq!(parse("+5"), SeedValue::Text("+5".to_string()));
        assert_eq!(parse("-0"), SeedValue::Text("-0".to_string()));
        assert_eq!(parse("party"), SeedValue::Text("party".to_string()));
    }

    #[test]
    fn test_seed_display() {
        assert_eq!(SeedValue::Int(5).to_string(), "5");
        assert_eq!(SeedValue::from("abc").to_string(), "\"abc\"");
    }
}
