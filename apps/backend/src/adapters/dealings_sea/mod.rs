//! SeaORM adapter for dealings (one hand plus bid/score per player and round).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::dealings;

pub async fn create_dealing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    user_id: i64,
) -> Result<dealings::Model, sea_orm::DbErr> {
    dealings::ActiveModel {
        id: NotSet,
        round_id: Set(round_id),
        user_id: Set(user_id),
        bid: Set(None),
        actual_bid: Set(None),
        score: Set(None),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
) -> Result<Option<dealings::Model>, sea_orm::DbErr> {
    dealings::Entity::find_by_id(dealing_id).one(conn).await
}

pub async fn find_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    user_id: i64,
) -> Result<Option<dealings::Model>, sea_orm::DbErr> {
    dealings::Entity::find()
        .filter(dealings::Column::RoundId.eq(round_id))
        .filter(dealings::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

pub async fn list_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<dealings::Model>, sea_orm::DbErr> {
    dealings::Entity::find()
        .filter(dealings::Column::RoundId.eq(round_id))
        .order_by_asc(dealings::Column::Id)
        .all(conn)
        .await
}

async fn require<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
) -> Result<dealings::Model, sea_orm::DbErr> {
    find_by_id(conn, dealing_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Dealing not found".to_string()))
}

pub async fn set_bid<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
    bid: i16,
) -> Result<dealings::Model, sea_orm::DbErr> {
    let mut active: dealings::ActiveModel = require(conn, dealing_id).await?.into();
    active.bid = Set(Some(bid));
    active.update(conn).await
}

pub async fn set_actualization<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
    actual_bid: i16,
    score: i32,
) -> Result<dealings::Model, sea_orm::DbErr> {
    let mut active: dealings::ActiveModel = require(conn, dealing_id).await?.into();
    active.actual_bid = Set(Some(actual_bid));
    active.score = Set(Some(score));
    active.update(conn).await
}
