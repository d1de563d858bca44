use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sea_orm::DatabaseTransaction;
use serde::Serialize;
use tracing::{debug, info};

use super::GameFlowService;
use crate::adapters::games_sea::GameCreate;
use crate::domain::round_plan::{self, MAX_PLAYERS};
use crate::domain::{
    assign_roles, deal_round_seeded, derive_dealing_seed, derive_rotation_seed, TurnRotation,
};
use crate::entities::GameType;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::rounds::NewRound;
use crate::repos::{cards, dealings, games, players, rounds, users};

/// Input for starting a game from an authenticated, ordered roster.
#[derive(Debug, Clone)]
pub struct NewGame {
    pub game_type: GameType,
    pub player_ids: Vec<i64>,
    /// Fixed seed for reproducible deals; drawn from entropy when absent.
    pub rng_seed: Option<i64>,
}

impl NewGame {
    pub fn multiplayer(player_ids: Vec<i64>) -> Self {
        Self {
            game_type: GameType::Multiplayer,
            player_ids,
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedGame {
    pub game_id: i64,
    pub first_round_id: i64,
    pub round_count: usize,
}

fn validate_roster(player_ids: &[i64]) -> Result<u8, DomainError> {
    let count = u8::try_from(player_ids.len())
        .ok()
        .filter(|n| *n <= MAX_PLAYERS)
        .ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("A game seats at most {MAX_PLAYERS} players"),
            )
        })?;
    round_plan::validate_player_count(count)?;

    let mut seen = HashSet::with_capacity(player_ids.len());
    if let Some(dup) = player_ids.iter().find(|id| !seen.insert(**id)) {
        return Err(DomainError::validation(
            ValidationKind::DuplicatePlayer,
            format!("User {dup} appears twice in the roster"),
        ));
    }
    Ok(count)
}

impl GameFlowService {
    /// Create a game and deal its whole round plan up front.
    ///
    /// The first round becomes current. Seats follow roster order; the dealer
    /// rotation starts at an offset drawn from the game seed.
    pub async fn create_game(
        &self,
        txn: &DatabaseTransaction,
        new_game: NewGame,
    ) -> Result<CreatedGame, AppError> {
        let player_count = validate_roster(&new_game.player_ids)?;
        users::require_many(txn, &new_game.player_ids).await?;

        let seed = new_game.rng_seed.unwrap_or_else(rand::random::<i64>);
        let shapes = round_plan::generate(player_count)?;

        let mut rotation_rng = ChaCha20Rng::seed_from_u64(derive_rotation_seed(seed));
        let rotation = TurnRotation::random(usize::from(player_count), &mut rotation_rng)?;
        let rotation_start = rotation.start();
        let roles = assign_roles(rotation, shapes.len());

        let game = games::create_game(
            txn,
            GameCreate::new(i16::from(player_count), seed, rotation_start as i16)
                .with_type(new_game.game_type),
        )
        .await?;
        info!(
            game_id = game.id,
            players = player_count,
            rounds = shapes.len(),
            rotation_start,
            "Creating game"
        );

        for (seat, user_id) in new_game.player_ids.iter().enumerate() {
            players::add_player(txn, game.id, *user_id, seat as u8).await?;
        }

        let mut first_round_id = None;
        for (idx, (shape, role)) in shapes.iter().zip(&roles).enumerate() {
            let sequence_number = (idx + 1) as i16;
            let dealt = deal_round_seeded(
                *shape,
                player_count,
                derive_dealing_seed(seed, sequence_number),
            )?;

            let round = rounds::create_round(
                txn,
                NewRound {
                    game_id: game.id,
                    sequence_number,
                    shape: *shape,
                    trump: dealt.trump,
                    is_current: idx == 0,
                    dealer_id: new_game.player_ids[role.dealer],
                    opening_player_id: new_game.player_ids[role.opener],
                },
            )
            .await?;
            first_round_id.get_or_insert(round.id);

            for (user_id, hand) in new_game.player_ids.iter().zip(&dealt.hands) {
                let dealing = dealings::create_dealing(txn, round.id, *user_id).await?;
                cards::create_cards(txn, dealing.id, hand).await?;
            }
            debug!(
                game_id = game.id,
                round_id = round.id,
                sequence_number,
                shape = %shape,
                trump_suit = ?dealt.trump.suit(),
                "Dealt round"
            );
        }

        let first_round_id = first_round_id
            .ok_or_else(|| AppError::internal("Round plan produced no rounds"))?;

        Ok(CreatedGame {
            game_id: game.id,
            first_round_id,
            round_count: shapes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_validation() {
        assert_eq!(validate_roster(&[1, 2, 3, 4]).unwrap(), 4);
        assert_eq!(
            validate_roster(&[1]).unwrap_err().validation_kind(),
            Some(&ValidationKind::InvalidPlayerCount)
        );
        assert_eq!(
            validate_roster(&[1, 2, 1]).unwrap_err().validation_kind(),
            Some(&ValidationKind::DuplicatePlayer)
        );
        let too_many: Vec<i64> = (0..37).collect();
        assert_eq!(
            validate_roster(&too_many).unwrap_err().validation_kind(),
            Some(&ValidationKind::InvalidPlayerCount)
        );
    }
}
