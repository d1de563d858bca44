//! Dealing repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::dealings_sea as dealings_adapter;
use crate::entities::dealings;
use crate::errors::domain::{DomainError, NotFoundKind};

/// One player's bid and score record for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dealing {
    pub id: i64,
    pub round_id: i64,
    pub user_id: i64,
    pub bid: Option<u8>,
    pub actual_bid: Option<u8>,
    pub score: Option<i32>,
}

impl From<dealings::Model> for Dealing {
    fn from(model: dealings::Model) -> Self {
        Self {
            id: model.id,
            round_id: model.round_id,
            user_id: model.user_id,
            bid: model.bid.map(|b| b as u8),
            actual_bid: model.actual_bid.map(|a| a as u8),
            score: model.score,
        }
    }
}

pub async fn create_dealing<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    user_id: i64,
) -> Result<Dealing, DomainError> {
    let dealing = dealings_adapter::create_dealing(conn, round_id, user_id).await?;
    Ok(Dealing::from(dealing))
}

pub async fn find_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    user_id: i64,
) -> Result<Option<Dealing>, DomainError> {
    let dealing = dealings_adapter::find_for_user(conn, round_id, user_id).await?;
    Ok(dealing.map(Dealing::from))
}

pub async fn require_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    user_id: i64,
) -> Result<Dealing, DomainError> {
    find_for_user(conn, round_id, user_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Dealing,
            format!("No dealing for user {user_id} in round {round_id}"),
        )
    })
}

pub async fn list_by_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Vec<Dealing>, DomainError> {
    let rows = dealings_adapter::list_by_round(conn, round_id).await?;
    Ok(rows.into_iter().map(Dealing::from).collect())
}

pub async fn set_bid<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
    bid: u8,
) -> Result<Dealing, DomainError> {
    let dealing = dealings_adapter::set_bid(conn, dealing_id, i16::from(bid)).await?;
    Ok(Dealing::from(dealing))
}

pub async fn set_actualization<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dealing_id: i64,
    actual_bid: u8,
    score: i32,
) -> Result<Dealing, DomainError> {
    let dealing =
        dealings_adapter::set_actualization(conn, dealing_id, i16::from(actual_bid), score).await?;
    Ok(Dealing::from(dealing))
}
