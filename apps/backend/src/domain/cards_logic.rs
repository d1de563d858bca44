//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `challenger` beats the current best card `best` under `trump`.
///
/// Same suit compares by rank; a trump beats any non-trump. Any other
/// combination leaves `best` in place.
pub fn card_beats(best: Card, challenger: Card, trump: Option<Suit>) -> bool {
    if challenger.suit == best.suit {
        return challenger.rank > best.rank;
    }
    match trump {
        Some(t) => challenger.suit == t && best.suit != t,
        None => false,
    }
}
