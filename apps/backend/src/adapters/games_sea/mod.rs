//! SeaORM adapter for games - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use crate::entities::games;

pub mod dto;

pub use dto::GameCreate;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

/// Find game by ID or return RecordNotFound.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    games::ActiveModel {
        id: NotSet,
        game_type: Set(dto.game_type),
        players_number: Set(dto.players_number),
        rng_seed: Set(dto.rng_seed),
        rotation_start: Set(dto.rotation_start),
        is_finished: Set(false),
        created_at: Set(time::OffsetDateTime::now_utc()),
        finished_at: Set(None),
    }
    .insert(conn)
    .await
}

pub async fn mark_finished<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = require_game(conn, game_id).await?;
    let mut active: games::ActiveModel = game.into();
    active.is_finished = Set(true);
    active.finished_at = Set(Some(time::OffsetDateTime::now_utc()));
    active.update(conn).await
}
