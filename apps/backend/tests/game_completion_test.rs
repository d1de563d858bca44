mod common;
mod support;

use trumps_backend::db::txn::with_txn;
use trumps_backend::domain::rating::new_elo;
use trumps_backend::error::AppError;
use trumps_backend::errors::ErrorCode;
use trumps_backend::repos::{cards, dealings, games, players, rounds, users};
use trumps_backend::services::game_flow::GameFlowService;

use support::driver::play_to_end;
use support::game_setup::setup_game;
use support::test_state::memory_state;

#[tokio::test]
async fn full_game_finishes_and_moves_ratings() -> Result<(), AppError> {
    let state = memory_state().await;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let game = setup_game(txn, 2, 2024).await?;
            let result = play_to_end(txn, game.game_id, &game.players, 0).await?;
            assert_eq!(result.game_id, game.game_id);

            let stored = games::require_game(txn, game.game_id).await?;
            assert!(stored.is_finished);
            assert!(stored.finished_at.is_some());

            // The last round stays current once the plan is exhausted.
            let last = rounds::current_round(txn, game.game_id).await?.unwrap();
            assert_eq!(last.sequence_number as usize, game.round_count);

            let finals = dealings::list_by_round(txn, last.id).await?;
            let max = finals.iter().filter_map(|d| d.score).max().unwrap();
            assert_eq!(result.max_score, max);

            let mut expected_winners: Vec<i64> = finals
                .iter()
                .filter(|d| d.score == Some(max))
                .map(|d| d.user_id)
                .collect();
            expected_winners.sort();
            let mut recorded = players::winners(txn, game.game_id).await?;
            recorded.sort();
            assert_eq!(recorded, expected_winners);

            for change in &result.ratings {
                assert_eq!(change.old_elo, 1000);
                assert_eq!(change.new_elo, new_elo(1000, change.final_score, max));
                let user = users::require_user(txn, change.user_id).await?;
                assert_eq!(user.elo, change.new_elo);
            }
            Ok(())
        })
    })
    .await
}

#[tokio::test]
async fn finished_game_rejects_further_actions() -> Result<(), AppError> {
    let state = memory_state().await;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let game = setup_game(txn, 2, 31).await?;
            play_to_end(txn, game.game_id, &game.players, 1).await?;
            let last = rounds::current_round(txn, game.game_id).await?.unwrap();

            let dealing = dealings::require_for_user(txn, last.id, game.players[0]).await?;
            let card = cards::cards_by_dealing(txn, dealing.id).await?[0].id;
            let err = GameFlowService
                .play_card(txn, game.players[0], last.id, card)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::GameFinished);

            let err = GameFlowService
                .place_bid(txn, game.players[0], last.id, 0)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::GameFinished);

            let err = GameFlowService
                .finish_game(txn, game.game_id, last.id)
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::GameFinished);
            Ok(())
        })
    })
    .await
}
