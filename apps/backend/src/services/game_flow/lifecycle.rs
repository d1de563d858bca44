use sea_orm::DatabaseTransaction;
use tracing::info;

use super::GameFlowService;
use crate::domain::scoring::cumulative_score;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::dealings::{self, Dealing};
use crate::repos::rounds::{self, Round};
use crate::repos::entries;

impl GameFlowService {
    /// Score every dealing of a closed round.
    ///
    /// `actual_bid` counts the finished tricks each player owns; the score is
    /// layered on the same player's score from the previous round.
    pub async fn actualize_round(
        &self,
        txn: &DatabaseTransaction,
        round_id: i64,
    ) -> Result<Vec<Dealing>, AppError> {
        let round = rounds::require_round(txn, round_id).await?;
        let tricks = entries::list_finished(txn, round.id).await?;
        let previous = rounds::previous_round(txn, round.game_id, round.sequence_number).await?;

        let mut scored = Vec::new();
        for dealing in dealings::list_by_round(txn, round.id).await? {
            let bid = dealing.bid.ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::BiddingIncomplete,
                    format!("User {} never bid in round {}", dealing.user_id, round.id),
                )
            })?;
            let actual = tricks
                .iter()
                .filter(|t| t.owner_id == dealing.user_id)
                .count() as u8;

            let previous_score = match &previous {
                Some(prev) => dealings::find_for_user(txn, prev.id, dealing.user_id)
                    .await?
                    .and_then(|d| d.score),
                None => None,
            };
            let score = cumulative_score(previous_score, bid, actual);
            scored.push(dealings::set_actualization(txn, dealing.id, actual, score).await?);
        }

        info!(
            round_id,
            sequence_number = round.sequence_number,
            players = scored.len(),
            "Round actualized"
        );
        Ok(scored)
    }

    /// Hand currency to the next round, or return `None` when the plan is exhausted.
    ///
    /// On exhaustion the finishing round stays current so the final scores
    /// remain the game's visible state.
    pub async fn advance_round(
        &self,
        txn: &DatabaseTransaction,
        round: &Round,
    ) -> Result<Option<Round>, AppError> {
        let Some(next) =
            rounds::next_round_after(txn, round.game_id, round.sequence_number).await?
        else {
            info!(game_id = round.game_id, round_id = round.id, "Round plan exhausted");
            return Ok(None);
        };

        rounds::set_current(txn, round.id, false).await?;
        let next = rounds::set_current(txn, next.id, true).await?;
        info!(
            game_id = round.game_id,
            from = round.sequence_number,
            to = next.sequence_number,
            "Advanced round"
        );
        Ok(Some(next))
    }
}
