use serde::{Deserialize, Serialize};

use crate::domain::Suit;

/// One dealt card as seen by clients. `entry_id` is set once the card is played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullCardInfo {
    pub id: i64,
    pub suit: Suit,
    pub value: u8,
    pub user_id: i64,
    pub entry_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullUserCardInfo {
    pub id: i64,
    pub username: String,
    pub elo: i32,
    pub bid: Option<u8>,
    pub actual_bid: Option<u8>,
    pub score: Option<i32>,
    pub cards: Vec<FullCardInfo>,
}

/// The trick in progress and the cards already in it, in play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullEntryCardInfo {
    pub id: i64,
    pub cards: Vec<FullCardInfo>,
}

/// Snapshot of the current round broadcast after every state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullGameCardInfo {
    pub round_id: i64,
    pub users: Vec<FullUserCardInfo>,
    pub entry: Option<FullEntryCardInfo>,
    pub trump_suit: Option<Suit>,
    pub trump_value: Option<u8>,
}

impl FullGameCardInfo {
    pub fn user(&self, user_id: i64) -> Option<&FullUserCardInfo> {
        self.users.iter().find(|u| u.id == user_id)
    }
}
