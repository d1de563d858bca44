//! Dealing one round: hands without replacement, then the trump indicator.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::cards_types::{Card, Suit, Trump, NULLIFYING_TRUMP};
use super::deck::{all_cards, DECK_SIZE};
use super::round_plan::RoundShape;
use crate::errors::domain::{DomainError, ValidationKind};

/// Outcome of dealing one round. `hands[i]` belongs to the i-th roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealtRound {
    pub hands: Vec<Vec<Card>>,
    pub trump: Trump,
}

/// Deal `shape` to `player_count` players drawing from `rng`.
///
/// Each card is drawn uniformly from the cards still unused this round and
/// removed from the pool immediately. The trump indicator comes from what is
/// left; when nothing is left only a suit is drawn.
pub fn deal_round<R: Rng + ?Sized>(
    shape: RoundShape,
    player_count: u8,
    rng: &mut R,
) -> Result<DealtRound, DomainError> {
    let hand_size = usize::from(shape.hand_size(player_count)?);
    let players = usize::from(player_count);

    if hand_size == 0 || hand_size * players > DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::Other("DealSize".into()),
            format!("Cannot deal {hand_size} cards to {players} players from a {DECK_SIZE}-card deck"),
        ));
    }

    let mut pool = all_cards();
    let mut hands = Vec::with_capacity(players);
    for _ in 0..players {
        let mut hand = Vec::with_capacity(hand_size);
        for _ in 0..hand_size {
            let idx = rng.random_range(0..pool.len());
            hand.push(pool.swap_remove(idx));
        }
        hands.push(hand);
    }

    let drawn = if pool.is_empty() {
        Trump::SuitOnly(Suit::ALL[rng.random_range(0..Suit::ALL.len())])
    } else {
        Trump::Card(pool[rng.random_range(0..pool.len())])
    };

    Ok(DealtRound {
        hands,
        trump: nullify_trump(shape, drawn),
    })
}

/// Deal with a ChaCha stream seeded from `seed`; same seed, same deal.
pub fn deal_round_seeded(
    shape: RoundShape,
    player_count: u8,
    seed: u64,
) -> Result<DealtRound, DomainError> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    deal_round(shape, player_count, &mut rng)
}

/// No-trump rounds and a turned-up seven of spades both null the trump.
pub fn nullify_trump(shape: RoundShape, drawn: Trump) -> Trump {
    if shape.forces_no_trump() {
        return Trump::NoTrumps;
    }
    match drawn {
        Trump::Card(card) if card == NULLIFYING_TRUMP => Trump::NoTrumps,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::cards_types::Rank;

    #[test]
    fn hands_are_disjoint_and_exclude_indicator() {
        let dealt = deal_round_seeded(RoundShape::Cards(5), 4, 7).unwrap();
        let mut seen = HashSet::new();
        for hand in &dealt.hands {
            assert_eq!(hand.len(), 5);
            for card in hand {
                assert!(seen.insert(*card), "duplicate {card}");
            }
        }
        if let Trump::Card(indicator) = dealt.trump {
            assert!(!seen.contains(&indicator));
        }
    }

    #[test]
    fn same_seed_same_deal() {
        let a = deal_round_seeded(RoundShape::Blind, 3, 99).unwrap();
        let b = deal_round_seeded(RoundShape::Blind, 3, 99).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn full_deck_deal_draws_suit_only_trump() {
        // 4 players x 9 cards uses the whole deck.
        let dealt = deal_round_seeded(RoundShape::Cards(9), 4, 3).unwrap();
        assert!(matches!(dealt.trump, Trump::SuitOnly(_)));
        assert_eq!(dealt.trump.rank(), None);
    }

    #[test]
    fn no_trump_round_always_nulls_trump() {
        for seed in 0..50 {
            let dealt = deal_round_seeded(RoundShape::NoTrump, 5, seed).unwrap();
            assert_eq!(dealt.trump, Trump::NoTrumps);
        }
    }

    #[test]
    fn seven_of_spades_nulls_trump_in_any_shape() {
        let seven = Trump::Card(Card::new(Suit::Spades, Rank::Seven));
        assert_eq!(nullify_trump(RoundShape::Cards(3), seven), Trump::NoTrumps);
        assert_eq!(nullify_trump(RoundShape::Blind, seven), Trump::NoTrumps);

        let eight = Trump::Card(Card::new(Suit::Spades, Rank::Eight));
        assert_eq!(nullify_trump(RoundShape::Cards(3), eight), eight);
        let suit_only = Trump::SuitOnly(Suit::Spades);
        assert_eq!(nullify_trump(RoundShape::Cards(9), suit_only), suit_only);
    }

    #[test]
    fn oversized_deal_is_rejected() {
        assert!(deal_round_seeded(RoundShape::Cards(10), 4, 1).is_err());
    }
}
