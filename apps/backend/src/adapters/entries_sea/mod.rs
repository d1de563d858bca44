//! SeaORM adapter for entries (tricks).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::entries;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<Option<entries::Model>, sea_orm::DbErr> {
    entries::Entity::find_by_id(entry_id).one(conn).await
}

/// The unfinished entry of a round, if a trick is in progress.
pub async fn find_open<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<entries::Model>, sea_orm::DbErr> {
    entries::Entity::find()
        .filter(entries::Column::RoundId.eq(round_id))
        .filter(entries::Column::IsFinished.eq(false))
        .order_by_desc(entries::Column::TrickNo)
        .one(conn)
        .await
}

/// Most recently finished entry of a round.
pub async fn find_last_finished<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<entries::Model>, sea_orm::DbErr> {
    entries::Entity::find()
        .filter(entries::Column::RoundId.eq(round_id))
        .filter(entries::Column::IsFinished.eq(true))
        .order_by_desc(entries::Column::TrickNo)
        .one(conn)
        .await
}

pub async fn list_finished<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<entries::Model>, sea_orm::DbErr> {
    entries::Entity::find()
        .filter(entries::Column::RoundId.eq(round_id))
        .filter(entries::Column::IsFinished.eq(true))
        .order_by_asc(entries::Column::TrickNo)
        .all(conn)
        .await
}

pub async fn count_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    entries::Entity::find()
        .filter(entries::Column::RoundId.eq(round_id))
        .count(conn)
        .await
}

pub async fn create_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    owner_id: i64,
    trick_no: i16,
) -> Result<entries::Model, sea_orm::DbErr> {
    entries::ActiveModel {
        id: NotSet,
        round_id: Set(round_id),
        owner_id: Set(owner_id),
        trick_no: Set(trick_no),
        is_finished: Set(false),
        created_at: Set(time::OffsetDateTime::now_utc()),
        finished_at: Set(None),
    }
    .insert(conn)
    .await
}

async fn require<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<entries::Model, sea_orm::DbErr> {
    find_by_id(conn, entry_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Entry not found".to_string()))
}

pub async fn set_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
    owner_id: i64,
) -> Result<entries::Model, sea_orm::DbErr> {
    let mut active: entries::ActiveModel = require(conn, entry_id).await?.into();
    active.owner_id = Set(owner_id);
    active.update(conn).await
}

pub async fn finish<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<entries::Model, sea_orm::DbErr> {
    let mut active: entries::ActiveModel = require(conn, entry_id).await?.into();
    active.is_finished = Set(true);
    active.finished_at = Set(Some(time::OffsetDateTime::now_utc()));
    active.update(conn).await
}
