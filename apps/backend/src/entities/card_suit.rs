use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::Suit;

/// Single-letter suit code as stored in `rounds.trump_suit` and `cards.suit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(1))")]
pub enum CardSuit {
    #[sea_orm(string_value = "H")]
    H,
    #[sea_orm(string_value = "D")]
    D,
    #[sea_orm(string_value = "C")]
    C,
    #[sea_orm(string_value = "S")]
    S,
}

impl From<Suit> for CardSuit {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Hearts => CardSuit::H,
            Suit::Diamonds => CardSuit::D,
            Suit::Clubs => CardSuit::C,
            Suit::Spades => CardSuit::S,
        }
    }
}

impl From<CardSuit> for Suit {
    fn from(suit: CardSuit) -> Self {
        match suit {
            CardSuit::H => Suit::Hearts,
            CardSuit::D => Suit::Diamonds,
            CardSuit::C => Suit::Clubs,
            CardSuit::S => Suit::Spades,
        }
    }
}
