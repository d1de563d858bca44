//! Users and games for integration tests.

use backend_test_support::unique_helpers::{unique_email, unique_str};
use sea_orm::DatabaseTransaction;
use trumps_backend::error::AppError;
use trumps_backend::services::game_flow::{GameFlowService, NewGame};
use trumps_backend::services::users;

pub struct TestGame {
    pub game_id: i64,
    pub first_round_id: i64,
    pub round_count: usize,
    /// Roster in seat order.
    pub players: Vec<i64>,
}

pub async fn register_players(
    txn: &DatabaseTransaction,
    count: usize,
) -> Result<Vec<i64>, AppError> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        let user = users::create_user(txn, &unique_str("player"), &unique_email("player")).await?;
        ids.push(user.id);
    }
    Ok(ids)
}

/// Register `players` users and start a seeded multiplayer game for them.
pub async fn setup_game(
    txn: &DatabaseTransaction,
    players: usize,
    seed: i64,
) -> Result<TestGame, AppError> {
    let ids = register_players(txn, players).await?;
    let created = GameFlowService
        .create_game(txn, NewGame::multiplayer(ids.clone()).with_seed(seed))
        .await?;
    Ok(TestGame {
        game_id: created.game_id,
        first_round_id: created.first_round_id,
        round_count: created.round_count,
        players: ids,
    })
}
