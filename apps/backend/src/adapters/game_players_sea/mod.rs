//! SeaORM adapter for the game roster and the winners list.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{game_players, game_winners};

pub async fn add_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    seat: i16,
) -> Result<game_players::Model, sea_orm::DbErr> {
    game_players::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        user_id: Set(user_id),
        seat: Set(seat),
    }
    .insert(conn)
    .await
}

/// Roster of a game in seat order.
pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<game_players::Model>, sea_orm::DbErr> {
    game_players::Entity::find()
        .filter(game_players::Column::GameId.eq(game_id))
        .order_by_asc(game_players::Column::Seat)
        .all(conn)
        .await
}

pub async fn add_winner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<game_winners::Model, sea_orm::DbErr> {
    game_winners::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        user_id: Set(user_id),
    }
    .insert(conn)
    .await
}

pub async fn list_winners<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<game_winners::Model>, sea_orm::DbErr> {
    game_winners::Entity::find()
        .filter(game_winners::Column::GameId.eq(game_id))
        .order_by_asc(game_winners::Column::UserId)
        .all(conn)
        .await
}
