//! The fixed 36-card deck.

use super::cards_types::{Card, Rank, Suit};

pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// Every card in the deck, suit-major in `Suit::ALL` order.
pub fn all_cards() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn deck_has_36_distinct_cards() {
        let cards = all_cards();
        assert_eq!(cards.len(), 36);
        assert_eq!(DECK_SIZE, 36);
        let unique: HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(unique.len(), 36);
    }

    #[test]
    fn deck_ranks_span_six_to_ace() {
        let cards = all_cards();
        assert!(cards.iter().all(|c| (6..=14).contains(&c.rank.value())));
        for suit in Suit::ALL {
            assert_eq!(cards.iter().filter(|c| c.suit == suit).count(), 9);
        }
    }
}
