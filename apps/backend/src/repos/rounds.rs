//! Round repository functions.

use sea_orm::ConnectionTrait;

use super::corrupt;
use crate::adapters::rounds_sea as rounds_adapter;
use crate::domain::{Rank, RoundShape, Suit, Trump};
use crate::entities::{rounds, CardSuit};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Round domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub id: i64,
    pub game_id: i64,
    pub sequence_number: i16,
    pub shape: RoundShape,
    pub trump: Trump,
    pub is_current: bool,
    pub dealer_id: i64,
    pub opening_player_id: i64,
}

/// Values for a new round row.
#[derive(Debug, Clone)]
pub struct NewRound {
    pub game_id: i64,
    pub sequence_number: i16,
    pub shape: RoundShape,
    pub trump: Trump,
    pub is_current: bool,
    pub dealer_id: i64,
    pub opening_player_id: i64,
}

impl TryFrom<rounds::Model> for Round {
    type Error = DomainError;

    fn try_from(model: rounds::Model) -> Result<Self, Self::Error> {
        let shape: RoundShape = model
            .shape_name
            .parse()
            .map_err(|_| corrupt(format!("Round {} has shape {:?}", model.id, model.shape_name)))?;
        let rank = model
            .trump_rank
            .map(|r| {
                u8::try_from(r)
                    .ok()
                    .and_then(|v| Rank::try_from(v).ok())
                    .ok_or_else(|| corrupt(format!("Round {} has trump rank {r}", model.id)))
            })
            .transpose()?;
        let trump = Trump::from_parts(model.trump_suit.map(Suit::from), rank)
            .map_err(|e| corrupt(format!("Round {}: {e}", model.id)))?;

        Ok(Self {
            id: model.id,
            game_id: model.game_id,
            sequence_number: model.sequence_number,
            shape,
            trump,
            is_current: model.is_current,
            dealer_id: model.dealer_id,
            opening_player_id: model.opening_player_id,
        })
    }
}

fn convert(model: Option<rounds::Model>) -> Result<Option<Round>, DomainError> {
    model.map(Round::try_from).transpose()
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Option<Round>, DomainError> {
    convert(rounds_adapter::find_by_id(conn, round_id).await?)
}

pub async fn require_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
) -> Result<Round, DomainError> {
    find_by_id(conn, round_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Round, format!("Round {round_id} not found"))
    })
}

/// The round currently accepting bids and plays.
pub async fn current_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<Round>, DomainError> {
    convert(rounds_adapter::find_current(conn, game_id).await?)
}

pub async fn previous_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    sequence_number: i16,
) -> Result<Option<Round>, DomainError> {
    convert(rounds_adapter::find_previous(conn, game_id, sequence_number).await?)
}

pub async fn next_round_after<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    sequence_number: i16,
) -> Result<Option<Round>, DomainError> {
    convert(rounds_adapter::find_next_after(conn, game_id, sequence_number).await?)
}

pub async fn list_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<Round>, DomainError> {
    rounds_adapter::find_all_by_game(conn, game_id)
        .await?
        .into_iter()
        .map(Round::try_from)
        .collect()
}

pub async fn create_round<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round: NewRound,
) -> Result<Round, DomainError> {
    let dto = rounds_adapter::RoundCreate {
        game_id: round.game_id,
        sequence_number: round.sequence_number,
        shape_name: round.shape.to_string(),
        trump_suit: round.trump.suit().map(CardSuit::from),
        trump_rank: round.trump.rank().map(|r| i16::from(r.value())),
        is_current: round.is_current,
        dealer_id: round.dealer_id,
        opening_player_id: round.opening_player_id,
    };
    Round::try_from(rounds_adapter::create_round(conn, dto).await?)
}

pub async fn set_current<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    round_id: i64,
    is_current: bool,
) -> Result<Round, DomainError> {
    Round::try_from(rounds_adapter::set_current(conn, round_id, is_current).await?)
}
