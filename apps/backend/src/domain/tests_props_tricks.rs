//! Property tests for trick legality and ownership (pure domain, no DB).
//!
//! - Holding the lead suit forbids any other non-trump suit
//! - Void in lead and trump makes every card legal
//! - The recomputed owner's card is never beaten by another card in the trick

use proptest::prelude::*;

use crate::domain::cards_logic::{card_beats, hand_has_suit};
use crate::domain::test_gens;
use crate::domain::tricks::{legal_cards, trick_owner, validate_play, TrickPlay};
use crate::errors::domain::ValidationKind;

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    #[test]
    fn prop_follow_suit_enforced(
        hand in test_gens::distinct_cards(9),
        lead in test_gens::suit(),
        trump in test_gens::trump(),
    ) {
        for card in &hand {
            let result = validate_play(&hand, *card, Some(lead), trump);
            let off_suit = card.suit != lead && Some(card.suit) != trump;
            if off_suit && hand_has_suit(&hand, lead) {
                let err = result.unwrap_err();
                prop_assert_eq!(err.validation_kind(), Some(&ValidationKind::MustFollowSuit));
            } else if !off_suit {
                prop_assert!(result.is_ok());
            }
        }
    }

    #[test]
    fn prop_void_hand_plays_anything(
        hand in test_gens::distinct_cards(9),
        lead in test_gens::suit(),
        trump in test_gens::trump(),
    ) {
        let void_lead = !hand_has_suit(&hand, lead);
        let void_trump = trump.is_none_or(|t| !hand_has_suit(&hand, t));
        if void_lead && void_trump {
            prop_assert_eq!(legal_cards(&hand, Some(lead), trump).len(), hand.len());
        }
    }

    #[test]
    fn prop_owner_holds_unbeaten_card(
        cards in test_gens::distinct_cards(8),
        trump in test_gens::trump(),
    ) {
        let plays: Vec<TrickPlay> = cards
            .iter()
            .enumerate()
            .map(|(i, card)| TrickPlay { user_id: i as i64, card: *card })
            .collect();

        for len in 1..=plays.len() {
            let prefix = &plays[..len];
            let owner = trick_owner(prefix, trump).unwrap();
            let best = prefix.iter().find(|p| p.user_id == owner).unwrap().card;
            for other in prefix {
                prop_assert!(!card_beats(best, other.card, trump));
            }
            if len == 1 {
                prop_assert_eq!(owner, prefix[0].user_id);
            }
        }
    }
}
