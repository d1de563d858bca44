//! Flattened view of a game's current round for broadcasting.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use super::cards::{self, DealtCard};
use super::{dealings, entries, players, rounds, users};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::protocol::{FullCardInfo, FullEntryCardInfo, FullGameCardInfo, FullUserCardInfo};

fn card_info(card: &DealtCard, owners: &HashMap<i64, i64>) -> Result<FullCardInfo, DomainError> {
    let user_id = owners.get(&card.dealing_id).copied().ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Dealing,
            format!("Card {} belongs to an unknown dealing", card.id),
        )
    })?;
    Ok(FullCardInfo {
        id: card.id,
        suit: card.card.suit,
        value: card.card.rank.value(),
        user_id,
        entry_id: card.entry_id,
    })
}

/// Every seated player's cards, bid and score for the current round, plus the open trick.
pub async fn load_full_game_info<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<FullGameCardInfo, DomainError> {
    let round = rounds::current_round(conn, game_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Round,
            format!("Game {game_id} has no current round"),
        )
    })?;

    let roster = players::roster(conn, game_id).await?;
    let user_ids: Vec<i64> = roster.iter().map(|s| s.user_id).collect();
    let people = users::require_many(conn, &user_ids).await?;
    let round_dealings = dealings::list_by_round(conn, round.id).await?;

    let owners: HashMap<i64, i64> = round_dealings.iter().map(|d| (d.id, d.user_id)).collect();

    let mut user_infos = Vec::with_capacity(people.len());
    for user in people {
        let dealing = round_dealings
            .iter()
            .find(|d| d.user_id == user.id)
            .copied()
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Dealing,
                    format!("No dealing for user {} in round {}", user.id, round.id),
                )
            })?;
        let dealt = cards::cards_by_dealing(conn, dealing.id).await?;
        let cards = dealt
            .iter()
            .map(|c| card_info(c, &owners))
            .collect::<Result<Vec<_>, _>>()?;

        user_infos.push(FullUserCardInfo {
            id: user.id,
            username: user.username,
            elo: user.elo,
            bid: dealing.bid,
            actual_bid: dealing.actual_bid,
            score: dealing.score,
            cards,
        });
    }

    let entry = match entries::open_entry(conn, round.id).await? {
        Some(open) => {
            let played = cards::cards_by_entry(conn, open.id).await?;
            Some(FullEntryCardInfo {
                id: open.id,
                cards: played
                    .iter()
                    .map(|c| card_info(c, &owners))
                    .collect::<Result<Vec<_>, _>>()?,
            })
        }
        None => None,
    };

    Ok(FullGameCardInfo {
        round_id: round.id,
        users: user_infos,
        entry,
        trump_suit: round.trump.suit(),
        trump_value: round.trump.rank().map(|r| r.value()),
    })
}
