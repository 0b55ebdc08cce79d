//! Deck assembly tests.
//!
//! Every stage of deck assembly must keep the one-shared-symbol property.

use std::collections::HashSet;

use proptest::prelude::*;
use spot_deck::{Card, Deck, DeckConfig, DeckError, PaddingPolicy, SeedValue, SymbolAssets};

fn assert_pairs_share_one(cards: &[Card]) {
    let sets: Vec<HashSet<u32>> = cards
        .iter()
        .map(|card| card.iter().map(|s| s.0).collect())
        .collect();

    for i in 0..sets.len() {
        for j in (i + 1)..sets.len() {
            assert_eq!(sets[i].intersection(&sets[j]).count(), 1, "cards {i}, {j}");
        }
    }
}

/// Test that symbol relabelling keeps one shared symbol per pair.
#[test]
fn test_relabelled_deck_keeps_property() {
    let deck = Deck::build(&DeckConfig::new(5).with_seed("relabel me").with_relabelling()).unwrap();
    assert_eq!(deck.len(), 31);
    assert_pairs_share_one(deck.cards());

    // Relabelling is a permutation of the pool
    let used: HashSet<u32> = deck.cards().iter().flat_map(|c| c.iter().map(|s| s.0)).collect();
    assert_eq!(used, (0..31).collect::<HashSet<u32>>());
}

/// Test truncating a deck below the full design size.
#[test]
fn test_truncated_deck() {
    let deck = Deck::build(&DeckConfig::new(7).with_seed(3u64).with_card_limit(55)).unwrap();
    assert_eq!(deck.len(), 55);
    assert_eq!(deck.symbol_count(), 57);
    assert!(deck.cards().iter().all(|c| c.len() == 8));
    assert_pairs_share_one(deck.cards());
}

/// Test that one config always builds the same deck.
#[test]
fn test_reproducible_from_config() {
    let config = DeckConfig::new(7).with_seed("game night").with_relabelling();
    let a = Deck::build(&config).unwrap();
    let b = Deck::build(&config).unwrap();
    assert_eq!(a, b);
}

/// Test building a deck from a JSON config.
#[test]
fn test_config_from_json() {
    let config: DeckConfig =
        serde_json::from_str(r#"{ "order": 3, "seed": "json", "shuffle_symbols": false }"#).unwrap();
    let deck = Deck::build(&config).unwrap();
    assert_eq!(deck.len(), 13);
    assert_eq!(deck.symbols_per_card(), 4);
}

/// Test that a negative JSON seed matches the same signed seed from Rust.
#[test]
fn test_negative_seed_from_json() {
    let config: DeckConfig = serde_json::from_str(r#"{ "seed": -1 }"#).unwrap();
    assert_eq!(config, DeckConfig::default().with_seed(-1i64));
    assert_eq!(config, DeckConfig::default().with_seed(-1i32));
    assert_eq!(config, DeckConfig::default().with_seed(u64::MAX));

    let from_json = Deck::build(&config).unwrap();
    let from_rust = Deck::build(&DeckConfig::default().with_seed(-1i64)).unwrap();
    assert_eq!(from_json, from_rust);
}

/// Test that integer-looking text parses the same way as a JSON integer.
#[test]
fn test_seed_text_parsing() {
    let parsed: SeedValue = "-1".parse().unwrap();
    assert_eq!(parsed, SeedValue::from(-1i64));
    assert_eq!("42".parse::<SeedValue>().unwrap(), SeedValue::Int(42));
    assert_eq!("007".parse::<SeedValue>().unwrap(), SeedValue::Text("007".into()));
}

/// Test that a built deck reads back from JSON unchanged.
#[test]
fn test_deck_json_round_trip() {
    let deck = Deck::build(&DeckConfig::new(5).with_seed("save").with_card_limit(20)).unwrap();
    let json = serde_json::to_string(&deck).unwrap();
    let back: Deck = serde_json::from_str(&json).unwrap();
    assert_eq!(back, deck);
    assert_pairs_share_one(back.cards());
}

/// Test that a deck read from JSON must hold valid cards.
#[test]
fn test_deck_json_rejects_bad_cards() {
    let malformed = r#"{"order":2,"seed":0,"cards":[[0,0],[9,9,9,9,9],[0,1,2]]}"#;
    assert!(serde_json::from_str::<Deck>(malformed).is_err());

    let two_shared = r#"{"order":2,"seed":0,"cards":[[0,1,2],[0,1,3]]}"#;
    assert!(serde_json::from_str::<Deck>(two_shared).is_err());

    let too_many = format!(
        r#"{{"order":2,"seed":0,"cards":{}}}"#,
        serde_json::to_string(&vec![[0, 1, 2]; 8]).unwrap()
    );
    assert!(serde_json::from_str::<Deck>(&too_many).is_err());
}

/// Test the errors raised for a bad order or card limit.
#[test]
fn test_build_errors() {
    assert_eq!(
        Deck::build(&DeckConfig::new(6)).unwrap_err(),
        DeckError::InvalidOrder { order: 6 }
    );
    assert_eq!(
        Deck::build(&DeckConfig::new(3).with_card_limit(14)).unwrap_err(),
        DeckError::CardLimitExceeded {
            requested: 14,
            available: 13
        }
    );
}

/// Test binding a full asset list to a deck.
#[test]
fn test_assets_for_deck() {
    let deck = Deck::build(&DeckConfig::new(2).with_seed(1u64)).unwrap();
    let names = ["anchor", "bolt", "cactus", "dice", "egg", "flame", "gem"];

    let assets = SymbolAssets::bind(names, deck.symbol_count(), PaddingPolicy::Reject).unwrap();
    for card in deck.cards() {
        let drawn: Vec<_> = assets.card_assets(card).collect();
        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(Option::is_some));
    }
}

/// Test rejecting and padding a short asset list.
#[test]
fn test_assets_insufficient() {
    let deck = Deck::build(&DeckConfig::new(7)).unwrap();
    let err = SymbolAssets::bind(0..50, deck.symbol_count(), PaddingPolicy::Reject).unwrap_err();
    assert_eq!(
        err,
        DeckError::InsufficientSymbols {
            required: 57,
            available: 50
        }
    );

    let padded = SymbolAssets::bind(0..50, deck.symbol_count(), PaddingPolicy::Placeholder).unwrap();
    assert_eq!(padded.missing(), 7);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Test that every seed and order keeps the pairing property.
    #[test]
    fn prop_any_seed_keeps_property(
        seed in any::<u64>(),
        order in prop::sample::select(vec![2u32, 3, 5, 7]),
        relabel in any::<bool>(),
    ) {
        let mut config = DeckConfig::new(order).with_seed(seed);
        config.relabel_symbols = relabel;
        let deck = Deck::build(&config).unwrap();
        prop_assert_eq!(deck.len(), deck.symbol_count());
        assert_pairs_share_one(deck.cards());
    }
}
