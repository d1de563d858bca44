//! Error codes for the game backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Every code
//! is SCREAMING_SNAKE_CASE and maps 1:1 to the string in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    InvalidGameId,
    InvalidPlayerCount,
    DuplicatePlayer,
    InvalidBid,
    MustFollowSuit,
    MustPlayTrump,
    CardNotInHand,
    OutOfTurn,
    PhaseMismatch,
    BiddingIncomplete,
    ParseCard,
    InvalidTrumpConversion,
    ValidationError,
    BadRequest,

    // Resource Not Found
    GameNotFound,
    UserNotFound,
    RoundNotFound,
    DealingNotFound,
    CardNotFound,
    EntryNotFound,
    NotFound,

    // Business Logic Conflicts
    GameFinished,
    BidAlreadyPlaced,
    DuplicateDealing,
    UniqueEmail,
    UniqueUsername,
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::DuplicatePlayer => "DUPLICATE_PLAYER",
            Self::InvalidBid => "INVALID_BID",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::MustPlayTrump => "MUST_PLAY_TRUMP",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::BiddingIncomplete => "BIDDING_INCOMPLETE",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidTrumpConversion => "INVALID_TRUMP_CONVERSION",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::DealingNotFound => "DEALING_NOT_FOUND",
            Self::CardNotFound => "CARD_NOT_FOUND",
            Self::EntryNotFound => "ENTRY_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::GameFinished => "GAME_FINISHED",
            Self::BidAlreadyPlaced => "BID_ALREADY_PLACED",
            Self::DuplicateDealing => "DUPLICATE_DEALING",
            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::UniqueUsername => "UNIQUE_USERNAME",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
