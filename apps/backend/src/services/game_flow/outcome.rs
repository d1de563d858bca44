use serde::Serialize;

/// Rating movement for one participant at game end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingChange {
    pub user_id: i64,
    pub old_elo: i32,
    pub new_elo: i32,
    pub final_score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub game_id: i64,
    pub max_score: i32,
    pub winners: Vec<i64>,
    pub ratings: Vec<RatingChange>,
}

/// What a single card play did to the game.
///
/// `GameFinished` is a terminal transition, not a failure: the caller
/// broadcasts final state and stops accepting plays for the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlayOutcome {
    /// Card accepted; the trick is still open.
    Played { entry_id: i64, owner_id: i64 },
    /// Card completed the trick; the round continues.
    TrickCompleted { entry_id: i64, winner_id: i64 },
    /// Card completed the round; scores are in and the next round is current.
    RoundAdvanced {
        entry_id: i64,
        winner_id: i64,
        scored_round_id: i64,
        next_round_id: i64,
    },
    GameFinished(GameResult),
}
