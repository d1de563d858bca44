//! Transport-agnostic payloads produced by the game engine.

pub mod events;
pub mod game_info;

pub use events::GameEvent;
pub use game_info::{FullCardInfo, FullEntryCardInfo, FullGameCardInfo, FullUserCardInfo};
