//! Game roster and winners.

use sea_orm::ConnectionTrait;

use crate::adapters::game_players_sea as players_adapter;
use crate::errors::domain::DomainError;

/// A seated participant. Seat order is roster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub user_id: i64,
    pub seat: u8,
}

pub async fn add_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
    seat: u8,
) -> Result<Seat, DomainError> {
    let row = players_adapter::add_player(conn, game_id, user_id, i16::from(seat)).await?;
    Ok(Seat {
        user_id: row.user_id,
        seat: row.seat as u8,
    })
}

/// Roster in seat order.
pub async fn roster<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Seat>, DomainError> {
    let rows = players_adapter::list_by_game(conn, game_id).await?;
    Ok(rows
        .into_iter()
        .map(|r| Seat {
            user_id: r.user_id,
            seat: r.seat as u8,
        })
        .collect())
}

pub async fn add_winner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    user_id: i64,
) -> Result<(), DomainError> {
    players_adapter::add_winner(conn, game_id, user_id).await?;
    Ok(())
}

/// Winner user ids, ascending.
pub async fn winners<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<i64>, DomainError> {
    let rows = players_adapter::list_winners(conn, game_id).await?;
    Ok(rows.into_iter().map(|r| r.user_id).collect())
}
