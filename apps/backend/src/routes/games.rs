//! Game HTTP routes: creation, state snapshots, bids and card plays.
//!
//! Every mutating route answers with the events a realtime layer would
//! broadcast to the table, so clients can apply them the same way.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::rules::valid_bid_range;
use crate::entities::GameType;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{GameId, RoundId};
use crate::protocol::GameEvent;
use crate::repos::dealings::Dealing;
use crate::repos::{game_info, games, rounds};
use crate::services::game_flow::{
    place_bid_locked, play_card_locked, CreatedGame, GameFlowService, NewGame, PlayOutcome,
};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub player_ids: Vec<i64>,
    #[serde(default)]
    pub game_type: Option<GameType>,
    #[serde(default)]
    pub rng_seed: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    pub game: CreatedGame,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Deserialize)]
pub struct BidRequest {
    pub user_id: i64,
    pub bid: u8,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DealingResponse {
    pub id: i64,
    pub round_id: i64,
    pub user_id: i64,
    pub bid: Option<u8>,
}

impl From<Dealing> for DealingResponse {
    fn from(d: Dealing) -> Self {
        Self {
            id: d.id,
            round_id: d.round_id,
            user_id: d.user_id,
            bid: d.bid,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BidResponse {
    pub dealing: DealingResponse,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    pub user_id: i64,
    pub card_id: i64,
}

#[derive(Debug, Serialize)]
pub struct PlayResponse {
    pub outcome: PlayOutcome,
    pub events: Vec<GameEvent>,
}

/// Problem document for a rejected bid or play. Client errors also carry the
/// `error` event the acting player would receive over a realtime channel.
fn rejected(err: AppError) -> HttpResponse {
    if err.status().is_client_error() {
        let event = GameEvent::from(&err);
        err.problem_response(vec![event])
    } else {
        err.problem_response(Vec::new())
    }
}

/// Current snapshot event for a game; `GameIsFinished` once it has ended.
async fn snapshot_event(
    http_req: &HttpRequest,
    app_state: &AppState,
    game_id: i64,
) -> Result<GameEvent, AppError> {
    with_txn(Some(http_req), app_state, |txn| {
        Box::pin(async move {
            let game = games::require_game(txn, game_id).await?;
            let info = game_info::load_full_game_info(txn, game_id).await?;
            Ok(if game.is_finished {
                GameEvent::GameIsFinished(info)
            } else {
                GameEvent::FullGameCardInfo(info)
            })
        })
    })
    .await
}

/// POST /api/games
async fn create_game(
    http_req: HttpRequest,
    body: web::Json<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let new_game = NewGame {
        game_type: body.game_type.unwrap_or(GameType::Multiplayer),
        player_ids: body.player_ids,
        rng_seed: body.rng_seed,
    };

    let game = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { GameFlowService.create_game(txn, new_game).await })
    })
    .await?;

    let events = vec![
        GameEvent::GameStart { id: game.game_id },
        snapshot_event(&http_req, &app_state, game.game_id).await?,
    ];

    Ok(HttpResponse::Created().json(CreateGameResponse { game, events }))
}

/// GET /api/games/{game_id}/info
async fn get_info(
    http_req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let event = snapshot_event(&http_req, &app_state, game_id.0).await?;
    Ok(HttpResponse::Ok().json(event))
}

/// POST /api/rounds/{round_id}/bids
///
/// The bid upper bound depends on the round's hand size and is checked here;
/// ordering and phase rules are enforced by the engine under the round lock.
async fn place_bid(
    http_req: HttpRequest,
    round_id: RoundId,
    body: web::Json<BidRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let BidRequest { user_id, bid } = body.into_inner();
    let round_id = round_id.0;

    let checked = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            let round = rounds::require_round(txn, round_id).await?;
            let game = games::require_game(txn, round.game_id).await?;
            let hand_size = round.shape.hand_size(game.players_number)?;
            let range = valid_bid_range(hand_size);
            if !range.contains(&bid) {
                return Err(AppError::invalid(
                    ErrorCode::InvalidBid,
                    format!(
                        "Bid {bid} outside {}..={} for a {} round",
                        range.start(),
                        range.end(),
                        round.shape
                    ),
                ));
            }
            Ok(game.id)
        })
    })
    .await;
    let game_id = match checked {
        Ok(game_id) => game_id,
        Err(err) => return Ok(rejected(err)),
    };

    let dealing =
        match place_bid_locked(Some(&http_req), &app_state, user_id, round_id, bid).await {
            Ok(dealing) => dealing,
            Err(err) => return Ok(rejected(err)),
        };

    let events = vec![
        GameEvent::Bid { user_id, bid },
        snapshot_event(&http_req, &app_state, game_id).await?,
    ];

    Ok(HttpResponse::Ok().json(BidResponse {
        dealing: dealing.into(),
        events,
    }))
}

/// POST /api/rounds/{round_id}/plays
async fn play_card(
    http_req: HttpRequest,
    round_id: RoundId,
    body: web::Json<PlayRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let PlayRequest { user_id, card_id } = body.into_inner();
    let round_id = round_id.0;

    let outcome =
        match play_card_locked(Some(&http_req), &app_state, user_id, round_id, card_id).await {
            Ok(outcome) => outcome,
            Err(err) => return Ok(rejected(err)),
        };

    let game_id = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(rounds::require_round(txn, round_id).await?.game_id) })
    })
    .await?;

    let events = vec![snapshot_event(&http_req, &app_state, game_id).await?];

    Ok(HttpResponse::Ok().json(PlayResponse { outcome, events }))
}

pub fn configure_game_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_game))
        .route("/{game_id}/info", web::get().to(get_info));
}

pub fn configure_round_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{round_id}/bids", web::post().to(place_bid))
        .route("/{round_id}/plays", web::post().to(play_card));
}
