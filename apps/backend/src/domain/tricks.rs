//! Trick legality and ownership.
//!
//! Ownership is recomputed from the full list of plays every time rather than
//! tracked incrementally; a trick never holds more cards than there are
//! players.

use super::cards_logic::{card_beats, hand_has_suit};
use super::cards_types::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// One card played into a trick, in play order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TrickPlay {
    pub user_id: i64,
    pub card: Card,
}

/// Suit of the first card in the trick, if any.
pub fn lead_suit(plays: &[TrickPlay]) -> Option<Suit> {
    plays.first().map(|p| p.card.suit)
}

/// Check that `card` may be played from `hand` into a trick led by `lead`.
///
/// `hand` is the player's remaining hand and must contain `card`. An off-lead
/// non-trump card is legal only when the hand holds neither the lead suit nor
/// the trump suit.
pub fn validate_play(
    hand: &[Card],
    card: Card,
    lead: Option<Suit>,
    trump: Option<Suit>,
) -> Result<(), DomainError> {
    if !hand.contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {card} is not in hand"),
        ));
    }

    let Some(lead) = lead else {
        return Ok(());
    };
    if card.suit == lead || Some(card.suit) == trump {
        return Ok(());
    }

    if hand_has_suit(hand, lead) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            format!("Must follow lead suit {lead}"),
        ));
    }
    if let Some(trump) = trump {
        if hand_has_suit(hand, trump) {
            return Err(DomainError::validation(
                ValidationKind::MustPlayTrump,
                format!("Must play trump suit {trump} when void in {lead}"),
            ));
        }
    }
    Ok(())
}

/// Cards from `hand` that `validate_play` would accept.
pub fn legal_cards(hand: &[Card], lead: Option<Suit>, trump: Option<Suit>) -> Vec<Card> {
    let mut legal: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|c| validate_play(hand, *c, lead, trump).is_ok())
        .collect();
    legal.sort();
    legal
}

/// Owner of the trick so far: whoever holds the best card.
///
/// The first play sets the owner unconditionally; a later card takes over only
/// if it beats the current best.
pub fn trick_owner(plays: &[TrickPlay], trump: Option<Suit>) -> Option<i64> {
    let (first, rest) = plays.split_first()?;
    let best = rest.iter().fold(*first, |best, play| {
        if card_beats(best.card, play.card, trump) {
            *play
        } else {
            best
        }
    });
    Some(best.user_id)
}

/// Seat expected to play next, given the seat that led and cards played so far.
pub fn next_seat(leader_seat: usize, played: usize, player_count: usize) -> usize {
    (leader_seat + played) % player_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_parsing::try_parse_cards;

    fn c(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn play(user_id: i64, s: &str) -> TrickPlay {
        TrickPlay {
            user_id,
            card: c(s),
        }
    }

    #[test]
    fn empty_trick_accepts_any_card() {
        let hand = try_parse_cards(["H6", "S9", "D12"]).unwrap();
        for card in &hand {
            assert!(validate_play(&hand, *card, None, Some(Suit::Clubs)).is_ok());
        }
    }

    #[test]
    fn must_follow_lead_when_holding_it() {
        let hand = try_parse_cards(["H6", "D9"]).unwrap();
        let err = validate_play(&hand, c("D9"), Some(Suit::Hearts), Some(Suit::Spades))
            .unwrap_err();
        assert_eq!(err.validation_kind(), Some(&ValidationKind::MustFollowSuit));
    }

    #[test]
    fn trump_is_always_legal() {
        let hand = try_parse_cards(["H6", "S9"]).unwrap();
        assert!(validate_play(&hand, c("S9"), Some(Suit::Hearts), Some(Suit::Spades)).is_ok());
    }

    #[test]
    fn void_in_lead_must_trump_if_possible() {
        let hand = try_parse_cards(["D6", "S9"]).unwrap();
        let err = validate_play(&hand, c("D6"), Some(Suit::Hearts), Some(Suit::Spades))
            .unwrap_err();
        assert_eq!(err.validation_kind(), Some(&ValidationKind::MustPlayTrump));
    }

    #[test]
    fn void_in_lead_and_trump_plays_anything() {
        let hand = try_parse_cards(["D6", "C9"]).unwrap();
        assert!(validate_play(&hand, c("D6"), Some(Suit::Hearts), Some(Suit::Spades)).is_ok());
        assert!(validate_play(&hand, c("C9"), Some(Suit::Hearts), None).is_ok());
    }

    #[test]
    fn card_outside_hand_is_rejected() {
        let hand = try_parse_cards(["D6"]).unwrap();
        let err = validate_play(&hand, c("D7"), None, None).unwrap_err();
        assert_eq!(err.validation_kind(), Some(&ValidationKind::CardNotInHand));
    }

    #[test]
    fn owner_sequence_with_trump_interrupt() {
        let trump = Some(Suit::Spades);
        let mut plays = vec![play(1, "H8")];
        assert_eq!(trick_owner(&plays, trump), Some(1));
        plays.push(play(2, "S6"));
        assert_eq!(trick_owner(&plays, trump), Some(2));
        plays.push(play(3, "H14"));
        assert_eq!(trick_owner(&plays, trump), Some(2));
    }

    #[test]
    fn higher_trump_overtakes_lower_trump() {
        let plays = vec![play(1, "H8"), play(2, "S6"), play(3, "S10")];
        assert_eq!(trick_owner(&plays, Some(Suit::Spades)), Some(3));
    }

    #[test]
    fn no_trump_round_lead_suit_wins() {
        let plays = vec![play(1, "D7"), play(2, "S14"), play(3, "D8")];
        assert_eq!(trick_owner(&plays, None), Some(3));
        assert_eq!(trick_owner(&[], None), None);
    }

    #[test]
    fn legal_cards_filters_by_follow_rules() {
        let hand = try_parse_cards(["H6", "H10", "S7", "D9"]).unwrap();
        let legal = legal_cards(&hand, Some(Suit::Hearts), Some(Suit::Spades));
        assert_eq!(legal, try_parse_cards(["H6", "H10", "S7"]).unwrap());
    }

    #[test]
    fn seats_wrap_from_leader() {
        assert_eq!(next_seat(2, 0, 4), 2);
        assert_eq!(next_seat(2, 2, 4), 0);
        assert_eq!(next_seat(3, 3, 4), 2);
    }
}
