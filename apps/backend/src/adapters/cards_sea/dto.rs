//! DTOs for cards_sea adapter.

use crate::entities::CardSuit;

/// One card dealt into a hand.
#[derive(Debug, Clone, Copy)]
pub struct CardCreate {
    pub suit: CardSuit,
    pub rank: i16,
}
