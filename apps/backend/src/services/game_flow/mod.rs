//! Game flow service: bridges pure domain logic with persistence.
//!
//! Every method runs against a caller-supplied transaction. `commands` wraps
//! the player-facing operations in the per-round lock plus `with_txn`.

mod commands;
mod completion;
mod lifecycle;
mod outcome;
mod player_actions;
mod setup;

pub use commands::{place_bid_locked, play_card_locked};
pub use outcome::{GameResult, PlayOutcome, RatingChange};
pub use setup::{CreatedGame, NewGame};

#[derive(Debug, Default, Clone, Copy)]
pub struct GameFlowService;
