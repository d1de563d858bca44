//! Round plan: the fixed sequence of round shapes for a game.

use std::fmt;
use std::str::FromStr;

use super::deck::DECK_SIZE;
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 36;

/// Shape of one round. Labels are "1".."max", "BR" and "NTR".
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RoundShape {
    Cards(u8),
    Blind,
    NoTrump,
}

impl RoundShape {
    /// Cards dealt to each player for this shape.
    pub fn hand_size(self, player_count: u8) -> Result<u8, DomainError> {
        match self {
            RoundShape::Cards(n) => Ok(n),
            RoundShape::Blind | RoundShape::NoTrump => max_hand_size(player_count),
        }
    }

    pub fn forces_no_trump(self) -> bool {
        matches!(self, RoundShape::NoTrump)
    }
}

impl fmt::Display for RoundShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundShape::Cards(n) => write!(f, "{n}"),
            RoundShape::Blind => f.write_str("BR"),
            RoundShape::NoTrump => f.write_str("NTR"),
        }
    }
}

impl FromStr for RoundShape {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BR" => Ok(RoundShape::Blind),
            "NTR" => Ok(RoundShape::NoTrump),
            numeric => match numeric.parse::<u8>() {
                Ok(n) if n > 0 => Ok(RoundShape::Cards(n)),
                _ => Err(DomainError::validation(
                    ValidationKind::Other("RoundShape".into()),
                    format!("Unknown round shape '{s}'"),
                )),
            },
        }
    }
}

pub fn validate_player_count(player_count: u8) -> Result<(), DomainError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!(
                "Players number should be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {player_count}"
            ),
        ))
    }
}

/// `36 / player_count`, truncated.
pub fn max_hand_size(player_count: u8) -> Result<u8, DomainError> {
    validate_player_count(player_count)?;
    u8::try_from(DECK_SIZE / usize::from(player_count)).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Hand size for {player_count} players does not fit a u8"),
        )
    })
}

/// Generate the full round sequence for `player_count` players:
/// `1×N, 2..max-1, max×N, max-1..2, 1×N, BR×N, NTR×N`.
pub fn generate(player_count: u8) -> Result<Vec<RoundShape>, DomainError> {
    let max = max_hand_size(player_count)?;
    let n = usize::from(player_count);

    let mut plan = Vec::new();
    plan.extend(std::iter::repeat_n(RoundShape::Cards(1), n));
    plan.extend((2..max).map(RoundShape::Cards));
    plan.extend(std::iter::repeat_n(RoundShape::Cards(max), n));
    plan.extend((2..max).rev().map(RoundShape::Cards));
    plan.extend(std::iter::repeat_n(RoundShape::Cards(1), n));
    plan.extend(std::iter::repeat_n(RoundShape::Blind, n));
    plan.extend(std::iter::repeat_n(RoundShape::NoTrump, n));
    Ok(plan)
}
