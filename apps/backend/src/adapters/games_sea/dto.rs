//! DTOs for games_sea adapter.

use crate::entities::games::GameType;

/// DTO for creating a new game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub game_type: GameType,
    pub players_number: i16,
    pub rng_seed: i64,
    pub rotation_start: i16,
}

impl GameCreate {
    pub fn new(players_number: i16, rng_seed: i64, rotation_start: i16) -> Self {
        Self {
            game_type: GameType::Multiplayer,
            players_number,
            rng_seed,
            rotation_start,
        }
    }

    pub fn with_type(mut self, game_type: GameType) -> Self {
        self.game_type = game_type;
        self
    }
}
