//! SeaORM adapter for rounds.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::rounds;

pub mod dto;

pub use dto::RoundCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find_by_id(round_id).one(conn).await
}

/// All rounds of a game ordered by sequence number.
pub async fn find_all_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::GameId.eq(game_id))
        .order_by_asc(rounds::Column::SequenceNumber)
        .all(conn)
        .await
}

pub async fn find_current<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::GameId.eq(game_id))
        .filter(rounds::Column::IsCurrent.eq(true))
        .one(conn)
        .await
}

/// Closest round before `sequence_number`.
pub async fn find_previous<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    sequence_number: i16,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::GameId.eq(game_id))
        .filter(rounds::Column::SequenceNumber.lt(sequence_number))
        .order_by_desc(rounds::Column::SequenceNumber)
        .one(conn)
        .await
}

/// Closest non-current round after `sequence_number`.
pub async fn find_next_after<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    sequence_number: i16,
) -> Result<Option<rounds::Model>, sea_orm::DbErr> {
    rounds::Entity::find()
        .filter(rounds::Column::GameId.eq(game_id))
        .filter(rounds::Column::SequenceNumber.gt(sequence_number))
        .filter(rounds::Column::IsCurrent.eq(false))
        .order_by_asc(rounds::Column::SequenceNumber)
        .one(conn)
        .await
}

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RoundCreate,
) -> Result<rounds::Model, sea_orm::DbErr> {
    rounds::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        sequence_number: Set(dto.sequence_number),
        shape_name: Set(dto.shape_name),
        trump_suit: Set(dto.trump_suit),
        trump_rank: Set(dto.trump_rank),
        is_current: Set(dto.is_current),
        dealer_id: Set(dto.dealer_id),
        opening_player_id: Set(dto.opening_player_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn set_current<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    is_current: bool,
) -> Result<rounds::Model, sea_orm::DbErr> {
    let round = find_by_id(conn, round_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Round not found".to_string()))?;
    let mut active: rounds::ActiveModel = round.into();
    active.is_current = Set(is_current);
    active.update(conn).await
}
