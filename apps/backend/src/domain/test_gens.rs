// Proptest generators for domain types.

use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::domain::deck::all_cards;
use crate::domain::round_plan::{RoundShape, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::{Card, Rank, Suit};

pub fn proptest_config() -> ProptestConfig {
    ProptestConfig::with_cases(128)
}

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
        Just(Suit::Spades),
    ]
}

/// Trump suit, or `None` for a no-trump round.
pub fn trump() -> impl Strategy<Value = Option<Suit>> {
    prop_oneof![Just(None), suit().prop_map(Some)]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card::new(suit, rank))
}

/// Distinct cards drawn from the deck, `1..=max` of them.
pub fn distinct_cards(max: usize) -> impl Strategy<Value = Vec<Card>> {
    subsequence(all_cards(), 1..=max).prop_shuffle()
}

pub fn player_count() -> impl Strategy<Value = u8> {
    MIN_PLAYERS..=MAX_PLAYERS
}

/// A player count together with one shape from that count's round plan.
pub fn player_count_and_shape() -> impl Strategy<Value = (u8, RoundShape)> {
    player_count().prop_flat_map(|n| {
        let plan = crate::domain::round_plan::generate(n).unwrap_or_default();
        (Just(n), proptest::sample::select(plan))
    })
}
