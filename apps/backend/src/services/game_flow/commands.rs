//! Player-facing commands: per-round lock, then one transaction.

use actix_web::HttpRequest;

use super::{GameFlowService, PlayOutcome};
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::repos::dealings::Dealing;
use crate::state::app_state::AppState;

pub async fn place_bid_locked(
    req: Option<&HttpRequest>,
    state: &AppState,
    user_id: i64,
    round_id: i64,
    bid: u8,
) -> Result<Dealing, AppError> {
    let guard = state.round_locks.acquire(round_id).await;
    let result = with_txn(req, state, |txn| {
        Box::pin(async move {
            GameFlowService
                .place_bid(txn, user_id, round_id, bid)
                .await
        })
    })
    .await;
    drop(guard);
    state.round_locks.release_if_idle(round_id);
    result
}

pub async fn play_card_locked(
    req: Option<&HttpRequest>,
    state: &AppState,
    user_id: i64,
    round_id: i64,
    card_id: i64,
) -> Result<PlayOutcome, AppError> {
    let guard = state.round_locks.acquire(round_id).await;
    let result = with_txn(req, state, |txn| {
        Box::pin(async move {
            GameFlowService
                .play_card(txn, user_id, round_id, card_id)
                .await
        })
    })
    .await;
    drop(guard);
    state.round_locks.release_if_idle(round_id);
    result
}
