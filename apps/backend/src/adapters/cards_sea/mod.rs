//! SeaORM adapter for dealt card instances.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use sea_orm::sea_query::JoinType;

use crate::entities::{cards, dealings};

pub mod dto;

pub use dto::CardCreate;

pub async fn create_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
    hand: &[CardCreate],
) -> Result<(), sea_orm::DbErr> {
    if hand.is_empty() {
        return Ok(());
    }
    let rows = hand.iter().map(|card| cards::ActiveModel {
        id: NotSet,
        dealing_id: Set(dealing_id),
        suit: Set(card.suit),
        rank: Set(card.rank),
        entry_id: Set(None),
        play_position: Set(None),
    });
    cards::Entity::insert_many(rows).exec(conn).await?;
    Ok(())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<Option<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find_by_id(card_id).one(conn).await
}

/// Every card dealt to a dealing, played or not.
pub async fn find_by_dealing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
) -> Result<Vec<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find()
        .filter(cards::Column::DealingId.eq(dealing_id))
        .order_by_asc(cards::Column::Id)
        .all(conn)
        .await
}

/// Cards of a dealing that have not been played yet.
pub async fn find_in_hand<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
) -> Result<Vec<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find()
        .filter(cards::Column::DealingId.eq(dealing_id))
        .filter(cards::Column::EntryId.is_null())
        .order_by_asc(cards::Column::Id)
        .all(conn)
        .await
}

/// Cards played into an entry, in play order.
pub async fn find_by_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<Vec<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find()
        .filter(cards::Column::EntryId.eq(entry_id))
        .order_by_asc(cards::Column::PlayPosition)
        .all(conn)
        .await
}

pub async fn assign_to_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
    entry_id: i64,
    play_position: i16,
) -> Result<cards::Model, sea_orm::DbErr> {
    let card = find_by_id(conn, card_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Card not found".to_string()))?;
    let mut active: cards::ActiveModel = card.into();
    active.entry_id = Set(Some(entry_id));
    active.play_position = Set(Some(play_position));
    active.update(conn).await
}

/// Cards still held by anyone in the round.
pub async fn count_unplayed_in_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    cards::Entity::find()
        .join(JoinType::InnerJoin, cards::Relation::Dealing.def())
        .filter(dealings::Column::RoundId.eq(round_id))
        .filter(cards::Column::EntryId.is_null())
        .count(conn)
        .await
}
