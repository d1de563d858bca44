//! Card parsing and display in the compact `<suit><value>` form (e.g. "H10", "S7").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.code(), self.rank.value())
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Suit::try_from(code),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCard,
                format!("Parse suit: {s}"),
            )),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"));

        let mut chars = s.chars();
        let suit_ch = chars.next().ok_or_else(parse_err)?;
        let suit = Suit::try_from(suit_ch).map_err(|_| parse_err())?;
        let value: u8 = chars.as_str().parse().map_err(|_| parse_err())?;
        let rank = Rank::try_from(value).map_err(|_| parse_err())?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g. "H8", "S14").
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
