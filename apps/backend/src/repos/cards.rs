//! Dealt card repository functions.

use sea_orm::ConnectionTrait;

use super::corrupt;
use crate::adapters::cards_sea as cards_adapter;
use crate::domain::{Card, Rank, Suit};
use crate::entities::{cards, CardSuit};
use crate::errors::domain::{DomainError, NotFoundKind};

/// A dealt card instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealtCard {
    pub id: i64,
    pub dealing_id: i64,
    pub card: Card,
    pub entry_id: Option<i64>,
    pub play_position: Option<i16>,
}

impl TryFrom<cards::Model> for DealtCard {
    type Error = DomainError;

    fn try_from(model: cards::Model) -> Result<Self, Self::Error> {
        let rank = u8::try_from(model.rank)
            .ok()
            .and_then(|v| Rank::try_from(v).ok())
            .ok_or_else(|| corrupt(format!("Card {} has rank {}", model.id, model.rank)))?;
        Ok(Self {
            id: model.id,
            dealing_id: model.dealing_id,
            card: Card::new(Suit::from(model.suit), rank),
            entry_id: model.entry_id,
            play_position: model.play_position,
        })
    }
}

fn convert_all(rows: Vec<cards::Model>) -> Result<Vec<DealtCard>, DomainError> {
    rows.into_iter().map(DealtCard::try_from).collect()
}

pub async fn create_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
    hand: &[Card],
) -> Result<(), DomainError> {
    let rows: Vec<cards_adapter::CardCreate> = hand
        .iter()
        .map(|c| cards_adapter::CardCreate {
            suit: CardSuit::from(c.suit),
            rank: i16::from(c.rank.value()),
        })
        .collect();
    cards_adapter::create_cards(conn, dealing_id, &rows).await?;
    Ok(())
}

pub async fn require_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<DealtCard, DomainError> {
    cards_adapter::find_by_id(conn, card_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Card, format!("Card {card_id} not found"))
        })
        .and_then(DealtCard::try_from)
}

pub async fn cards_by_dealing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
) -> Result<Vec<DealtCard>, DomainError> {
    convert_all(cards_adapter::find_by_dealing(conn, dealing_id).await?)
}

/// Cards still in hand for a dealing.
pub async fn hand<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
) -> Result<Vec<DealtCard>, DomainError> {
    convert_all(cards_adapter::find_in_hand(conn, dealing_id).await?)
}

/// Cards played into an entry, in play order.
pub async fn cards_by_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<Vec<DealtCard>, DomainError> {
    convert_all(cards_adapter::find_by_entry(conn, entry_id).await?)
}

pub async fn assign_to_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
    entry_id: i64,
    play_position: i16,
) -> Result<DealtCard, DomainError> {
    DealtCard::try_from(cards_adapter::assign_to_entry(conn, card_id, entry_id, play_position).await?)
}

pub async fn count_unplayed_in_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<u64, DomainError> {
    Ok(cards_adapter::count_unplayed_in_round(conn, round_id).await?)
}
