//! Core card-related types: Card, Rank, Suit, Trump

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "H")]
    Hearts,
    #[serde(rename = "D")]
    Diamonds,
    #[serde(rename = "C")]
    Clubs,
    #[serde(rename = "S")]
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Single-letter code used on the wire and in storage.
    pub const fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = DomainError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code {
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            'S' => Ok(Suit::Spades),
            other => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Unknown suit code '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rank {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 9] = [
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value in `6..=14`.
    pub const fn value(self) -> u8 {
        match self {
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl TryFrom<u8> for Rank {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ALL
            .into_iter()
            .find(|r| r.value() == value)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::ParseCard,
                    format!("Rank {value} is outside 6..=14"),
                )
            })
    }
}

/// A card value. Dealt instances get their identity from storage, not from here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    #[serde(rename = "value")]
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// The card that nulls trump whenever it is turned up as the indicator.
pub const NULLIFYING_TRUMP: Card = Card::new(Suit::Spades, Rank::Seven);

/// Trump for one round as chosen by the dealer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    /// Indicator card turned up from the undealt pool.
    Card(Card),
    /// Nothing was left to turn up, so only a suit was drawn.
    SuitOnly(Suit),
    NoTrumps,
}

impl Trump {
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Trump::Card(card) => Some(card.suit),
            Trump::SuitOnly(suit) => Some(*suit),
            Trump::NoTrumps => None,
        }
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Trump::Card(card) => Some(card.rank),
            Trump::SuitOnly(_) | Trump::NoTrumps => None,
        }
    }

    /// Rebuild from the nullable suit/rank pair kept on a round row.
    pub fn from_parts(suit: Option<Suit>, rank: Option<Rank>) -> Result<Self, DomainError> {
        match (suit, rank) {
            (Some(suit), Some(rank)) => Ok(Trump::Card(Card::new(suit, rank))),
            (Some(suit), None) => Ok(Trump::SuitOnly(suit)),
            (None, None) => Ok(Trump::NoTrumps),
            (None, Some(_)) => Err(DomainError::validation(
                ValidationKind::InvalidTrumpConversion,
                "Trump rank present without a trump suit",
            )),
        }
    }
}
