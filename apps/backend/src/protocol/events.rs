use serde::{Deserialize, Serialize};

use super::game_info::FullGameCardInfo;
use crate::error::AppError;

/// Outbound game events, serialized as `{"event": ..., "data": ...}`.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum GameEvent {
    GameStart { id: i64 },
    FullGameCardInfo(FullGameCardInfo),
    GameIsFinished(FullGameCardInfo),
    Bid { user_id: i64, bid: u8 },
    Error { message: String },
}

impl GameEvent {
    pub fn error(message: impl Into<String>) -> Self {
        GameEvent::Error {
            message: message.into(),
        }
    }
}

impl From<&AppError> for GameEvent {
    fn from(err: &AppError) -> Self {
        GameEvent::error(err.detail())
    }
}
