use sea_orm::DatabaseTransaction;
use tracing::info;

use super::{GameFlowService, GameResult, RatingChange};
use crate::domain::rating::{max_score, new_elo, winners};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::{dealings, games, players, users};

impl GameFlowService {
    /// Record winners, move every participant's rating and close the game.
    ///
    /// Runs exactly once per game; a second call is a `GameFinished` conflict.
    pub async fn finish_game(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        final_round_id: i64,
    ) -> Result<GameResult, AppError> {
        let game = games::require_game(txn, game_id).await?;
        if game.is_finished {
            return Err(DomainError::conflict(
                ConflictKind::GameFinished,
                format!("Game {game_id} is already finished"),
            )
            .into());
        }

        let final_scores: Vec<(i64, i32)> = dealings::list_by_round(txn, final_round_id)
            .await?
            .iter()
            .map(|d| (d.user_id, d.score.unwrap_or(0)))
            .collect();
        let max = max_score(&final_scores).unwrap_or(0);
        let winner_ids = winners(&final_scores);

        for user_id in &winner_ids {
            players::add_winner(txn, game_id, *user_id).await?;
        }

        let mut ratings = Vec::with_capacity(final_scores.len());
        for (user_id, final_score) in &final_scores {
            let user = users::require_user(txn, *user_id).await?;
            let updated = new_elo(user.elo, *final_score, max);
            users::update_elo(txn, *user_id, updated).await?;
            ratings.push(RatingChange {
                user_id: *user_id,
                old_elo: user.elo,
                new_elo: updated,
                final_score: *final_score,
            });
        }

        games::mark_finished(txn, game_id).await?;
        info!(game_id, max_score = max, winners = ?winner_ids, "Game finished");

        Ok(GameResult {
            game_id,
            max_score: max,
            winners: winner_ids,
            ratings,
        })
    }
}
