//! DTOs for rounds_sea adapter.

use crate::entities::CardSuit;

/// DTO for creating a dealt round.
#[derive(Debug, Clone)]
pub struct RoundCreate {
    pub game_id: i64,
    pub sequence_number: i16,
    pub shape_name: String,
    pub trump_suit: Option<CardSuit>,
    pub trump_rank: Option<i16>,
    pub is_current: bool,
    pub dealer_id: i64,
    pub opening_player_id: i64,
}
