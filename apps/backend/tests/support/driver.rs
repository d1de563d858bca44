//! Drives a game forward with legal moves.
//!
//! The driver does not track turn order itself: it offers each seated player's
//! lowest legal card and moves on when the engine answers `OUT_OF_TURN`.

use sea_orm::DatabaseTransaction;
use trumps_backend::domain::tricks::legal_cards;
use trumps_backend::domain::{Card, Rank};
use trumps_backend::error::AppError;
use trumps_backend::errors::ErrorCode;
use trumps_backend::protocol::FullCardInfo;
use trumps_backend::repos::{game_info, rounds};
use trumps_backend::services::game_flow::{GameFlowService, GameResult, PlayOutcome};

fn to_card(info: &FullCardInfo) -> Card {
    let rank = Rank::try_from(info.value).expect("dealt card has a deck rank");
    Card::new(info.suit, rank)
}

pub async fn bid_all(
    txn: &DatabaseTransaction,
    round_id: i64,
    players: &[i64],
    bid: u8,
) -> Result<(), AppError> {
    for user_id in players {
        GameFlowService
            .place_bid(txn, *user_id, round_id, bid)
            .await?;
    }
    Ok(())
}

/// Make exactly one legal play for whichever player is due.
pub async fn play_one(txn: &DatabaseTransaction, game_id: i64) -> Result<PlayOutcome, AppError> {
    let info = game_info::load_full_game_info(txn, game_id).await?;
    let lead = info
        .entry
        .as_ref()
        .and_then(|e| e.cards.first())
        .map(|c| c.suit);

    for user in &info.users {
        let in_hand: Vec<&FullCardInfo> =
            user.cards.iter().filter(|c| c.entry_id.is_none()).collect();
        let hand: Vec<Card> = in_hand.iter().map(|c| to_card(c)).collect();
        let Some(choice) = legal_cards(&hand, lead, info.trump_suit).first().copied() else {
            continue;
        };
        let card_id = in_hand
            .iter()
            .find(|c| to_card(c) == choice)
            .map(|c| c.id)
            .expect("legal card comes from the hand");

        match GameFlowService
            .play_card(txn, user.id, info.round_id, card_id)
            .await
        {
            Ok(outcome) => return Ok(outcome),
            Err(e) if e.code() == ErrorCode::OutOfTurn => continue,
            Err(e) => return Err(e),
        }
    }
    Err(AppError::internal("no seated player could move"))
}

/// Play the current round to its last card. Bids must already be in.
pub async fn play_round(txn: &DatabaseTransaction, game_id: i64) -> Result<PlayOutcome, AppError> {
    loop {
        let outcome = play_one(txn, game_id).await?;
        if matches!(
            outcome,
            PlayOutcome::RoundAdvanced { .. } | PlayOutcome::GameFinished(_)
        ) {
            return Ok(outcome);
        }
    }
}

/// Bid `bid` everywhere and play every remaining round.
pub async fn play_to_end(
    txn: &DatabaseTransaction,
    game_id: i64,
    players: &[i64],
    bid: u8,
) -> Result<GameResult, AppError> {
    loop {
        let round = rounds::current_round(txn, game_id)
            .await?
            .expect("unfinished game has a current round");
        bid_all(txn, round.id, players, bid).await?;
        if let PlayOutcome::GameFinished(result) = play_round(txn, game_id).await? {
            return Ok(result);
        }
    }
}
