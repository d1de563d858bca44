//! Property tests for dealing (pure domain, no DB).
//!
//! - No (suit, rank) appears twice across hands and the trump indicator
//! - Every hand matches the shape's hand size
//! - No-trump rounds and the seven of spades null the trump

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::cards_types::{Trump, NULLIFYING_TRUMP};
use crate::domain::dealing::deal_round_seeded;
use crate::domain::round_plan::RoundShape;
use crate::domain::test_gens;

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    #[test]
    fn prop_no_duplicate_deal(
        (players, shape) in test_gens::player_count_and_shape(),
        seed in any::<u64>(),
    ) {
        let dealt = deal_round_seeded(shape, players, seed).unwrap();
        let mut seen = HashSet::new();
        for card in dealt.hands.iter().flatten() {
            prop_assert!(seen.insert(*card), "duplicate card {}", card);
        }
        if let Trump::Card(indicator) = dealt.trump {
            prop_assert!(!seen.contains(&indicator));
        }
    }

    #[test]
    fn prop_hand_size_conformance(
        (players, shape) in test_gens::player_count_and_shape(),
        seed in any::<u64>(),
    ) {
        let dealt = deal_round_seeded(shape, players, seed).unwrap();
        let expected = match shape {
            RoundShape::Cards(n) => usize::from(n),
            RoundShape::Blind | RoundShape::NoTrump => usize::from(36 / players),
        };
        prop_assert_eq!(dealt.hands.len(), usize::from(players));
        for hand in &dealt.hands {
            prop_assert_eq!(hand.len(), expected);
        }
    }

    #[test]
    fn prop_trump_nullification(
        (players, shape) in test_gens::player_count_and_shape(),
        seed in any::<u64>(),
    ) {
        let dealt = deal_round_seeded(shape, players, seed).unwrap();
        if shape == RoundShape::NoTrump {
            prop_assert_eq!(dealt.trump, Trump::NoTrumps);
        }
        prop_assert_ne!(dealt.trump, Trump::Card(NULLIFYING_TRUMP));
        prop_assert_eq!(dealt.trump.rank().is_some(), matches!(dealt.trump, Trump::Card(_)));
    }
}
