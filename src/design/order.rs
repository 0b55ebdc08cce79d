//! Projective-plane order and the quantities derived from it.

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

/// Largest order accepted.
///
/// Memory grows with `V * K`, roughly `q³`: order 251 builds 63 253 cards of
/// 252 symbols (about 64 MB), while the next prime up is already past what a
/// deck generator should allocate.
pub const MAX_ORDER: u32 = 251;

/// Trial-division primality test.
///
/// Orders are small (the practical range is single or low double digits), so
/// nothing cleverer is needed.
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let n = u64::from(n);
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// A validated projective-plane order `q`.
///
/// Only prime orders are accepted. Every other quantity of a design follows
/// from `q`:
///
/// - symbol count `V = q² + q + 1`
/// - symbols per card `K = q + 1`
/// - card count, which equals `V`
///
/// ```
/// use spot_deck::design::Order;
///
/// let order = Order::new(7).unwrap();
/// assert_eq!(order.symbol_count(), 57);
/// assert_eq!(order.symbols_per_card(), 8);
///
/// assert!(Order::new(6).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Order(u32);

impl Order {
    /// Validate `q` as an order.
    ///
    /// Fails with [`DeckError::InvalidOrder`] unless `q` is a prime no larger
    /// than [`MAX_ORDER`].
    pub fn new(q: u32) -> Result<Self> {
        if q > MAX_ORDER || !is_prime(q) {
            return Err(DeckError::InvalidOrder { order: q });
        }
        Ok(Self(q))
    }

    /// Order for a deck with `k` symbols on each card (`q = k - 1`).
    pub fn for_symbols_per_card(k: u32) -> Result<Self> {
        match k.checked_sub(1) {
            Some(q) => Self::new(q),
            None => Err(DeckError::InvalidOrder { order: 0 }),
        }
    }

    /// Smallest order whose design has at least `card_count` cards.
    ///
    /// Returns `None` if even [`MAX_ORDER`] is too small.
    #[must_use]
    pub fn smallest_covering(card_count: usize) -> Option<Self> {
        (2..=MAX_ORDER)
            .filter(|&q| is_prime(q))
            .map(Self)
            .find(|order| order.symbol_count() >= card_count)
    }

    /// The raw order `q`.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of distinct symbols, `q² + q + 1`. Also the number of cards.
    #[must_use]
    pub const fn symbol_count(self) -> usize {
        let q = self.0 as usize;
        q * q + q + 1
    }

    /// Number of symbols on each card, `q + 1`.
    #[must_use]
    pub const fn symbols_per_card(self) -> usize {
        self.0 as usize + 1
    }
}

impl TryFrom<u32> for Order {
    type Error = DeckError;

    fn try_from(q: u32) -> Result<Self> {
        Self::new(q)
    }
}

impl From<Order> for u32 {
    fn from(order: Order) -> Self {
        order.0
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Order({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: Vec<u32> = (0..40).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
        assert!(is_prime(251));
        assert!(!is_prime(65_535));
    }

    #[test]
    fn test_rejects_small_and_composite() {
        for q in [0, 1, 4, 6, 8, 9, 15, 25] {
            assert_eq!(Order::new(q), Err(DeckError::InvalidOrder { order: q }));
        }
    }

    #[test]
    fn test_rejects_above_max() {
        assert!(is_prime(257));
        assert_eq!(Order::new(257), Err(DeckError::InvalidOrder { order: 257 }));
        assert_eq!(Order::new(65_521), Err(DeckError::InvalidOrder { order: 65_521 }));
    }

    #[test]
    fn test_max_order_is_prime() {
        assert_eq!(Order::new(MAX_ORDER).map(Order::get), Ok(MAX_ORDER));
    }

    #[test]
    fn test_derived_counts() {
        let fano = Order::new(2).unwrap();
        assert_eq!(fano.get(), 2);
        assert_eq!(fano.symbol_count(), 7);
        assert_eq!(fano.symbols_per_card(), 3);

        let classic = Order::new(7).unwrap();
        assert_eq!(classic.symbol_count(), 57);
        assert_eq!(classic.symbols_per_card(), 8);
    }

    #[test]
    fn test_for_symbols_per_card() {
        assert_eq!(Order::for_symbols_per_card(8).unwrap().get(), 7);
        assert_eq!(Order::for_symbols_per_card(6).unwrap().get(), 5);
        assert!(Order::for_symbols_per_card(5).is_err()); // q = 4
        assert!(Order::for_symbols_per_card(0).is_err());
    }

    #[test]
    fn test_smallest_covering() {
        assert_eq!(Order::smallest_covering(0).map(Order::get), Some(2));
        assert_eq!(Order::smallest_covering(7).map(Order::get), Some(2));
        assert_eq!(Order::smallest_covering(8).map(Order::get), Some(3));
        assert_eq!(Order::smallest_covering(55).map(Order::get), Some(7));
        assert_eq!(Order::smallest_covering(58).map(Order::get), Some(11));
        assert_eq!(Order::smallest_covering(63_254), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Order::new(5).unwrap()), "Order(5)");
    }

    #[test]
    fn test_serde_validates() {
        let order: Order = serde_json::from_str("3").unwrap();
        assert_eq!(order.get(), 3);
        assert_eq!(serde_json::to_string(&order).unwrap(), "3");

        assert!(serde_json::from_str::<Order>("4").is_err());
    }
}
