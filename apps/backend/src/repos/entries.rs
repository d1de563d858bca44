//! Entry (trick) repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::entries_sea as entries_adapter;
use crate::entities::entries;
use crate::errors::domain::DomainError;

/// Entry domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub round_id: i64,
    pub owner_id: i64,
    pub trick_no: i16,
    pub is_finished: bool,
    pub finished_at: Option<time::OffsetDateTime>,
}

impl From<entries::Model> for Entry {
    fn from(model: entries::Model) -> Self {
        Self {
            id: model.id,
            round_id: model.round_id,
            owner_id: model.owner_id,
            trick_no: model.trick_no,
            is_finished: model.is_finished,
            finished_at: model.finished_at,
        }
    }
}

pub async fn open_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<Entry>, DomainError> {
    let entry = entries_adapter::find_open(conn, round_id).await?;
    Ok(entry.map(Entry::from))
}

/// Return the round's open entry, creating the next trick with `owner_id` when none is open.
pub async fn get_or_create_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    owner_id: i64,
) -> Result<Entry, DomainError> {
    if let Some(entry) = open_entry(conn, round_id).await? {
        return Ok(entry);
    }
    let trick_no = entries_adapter::count_by_round(conn, round_id).await? as i16 + 1;
    let entry = entries_adapter::create_entry(conn, round_id, owner_id, trick_no).await?;
    Ok(Entry::from(entry))
}

pub async fn last_finished<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<Entry>, DomainError> {
    let entry = entries_adapter::find_last_finished(conn, round_id).await?;
    Ok(entry.map(Entry::from))
}

pub async fn list_finished<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<Entry>, DomainError> {
    let rows = entries_adapter::list_finished(conn, round_id).await?;
    Ok(rows.into_iter().map(Entry::from).collect())
}

pub async fn set_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
    owner_id: i64,
) -> Result<Entry, DomainError> {
    let entry = entries_adapter::set_owner(conn, entry_id, owner_id).await?;
    Ok(Entry::from(entry))
}

pub async fn finish<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    entry_id: i64,
) -> Result<Entry, DomainError> {
    let entry = entries_adapter::finish(conn, entry_id).await?;
    Ok(Entry::from(entry))
}
