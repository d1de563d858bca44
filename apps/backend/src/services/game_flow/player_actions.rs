use std::collections::HashMap;

use sea_orm::DatabaseTransaction;
use tracing::{debug, info};

use super::{GameFlowService, PlayOutcome};
use crate::domain::tricks::{lead_suit, next_seat, trick_owner, validate_play};
use crate::domain::{Card, TrickPlay};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::dealings::Dealing;
use crate::repos::games::Game;
use crate::repos::rounds::Round;
use crate::repos::{cards, dealings, entries, games, players, rounds};

/// Load the round plus its game, rejecting finished games and non-current rounds.
async fn load_open_round(
    txn: &DatabaseTransaction,
    round_id: i64,
) -> Result<(Round, Game), AppError> {
    let round = rounds::require_round(txn, round_id).await?;
    let game = games::require_game(txn, round.game_id).await?;
    if game.is_finished {
        return Err(DomainError::conflict(
            ConflictKind::GameFinished,
            format!("Game {} is finished", game.id),
        )
        .into());
    }
    if !round.is_current {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Round {round_id} is not the current round"),
        )
        .into());
    }
    Ok((round, game))
}

async fn play_started(txn: &DatabaseTransaction, round_id: i64) -> Result<bool, AppError> {
    Ok(entries::open_entry(txn, round_id).await?.is_some()
        || entries::last_finished(txn, round_id).await?.is_some())
}

impl GameFlowService {
    /// Record `user_id`'s bid for the current round.
    ///
    /// Bids are accepted once per player and only before the round's first
    /// card. The upper bound (hand size) is the caller's check.
    pub async fn place_bid(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
        round_id: i64,
        bid: u8,
    ) -> Result<Dealing, AppError> {
        debug!(user_id, round_id, bid, "Placing bid");
        let (round, _game) = load_open_round(txn, round_id).await?;
        let dealing = dealings::require_for_user(txn, round.id, user_id).await?;

        if dealing.bid.is_some() {
            return Err(DomainError::conflict(
                ConflictKind::BidAlreadyPlaced,
                format!("User {user_id} already bid in round {round_id}"),
            )
            .into());
        }
        if play_started(txn, round.id).await? {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Bids are closed once play has started",
            )
            .into());
        }

        let updated = dealings::set_bid(txn, dealing.id, bid).await?;
        info!(user_id, round_id, bid, "Bid placed");
        Ok(updated)
    }

    /// Play `card_id` from `user_id`'s hand into the round's open trick.
    ///
    /// Trick end is detected here: the trick closes when every player has
    /// played into it, and the round closes when no card is left in hand.
    /// Nothing is written when a check fails.
    pub async fn play_card(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
        round_id: i64,
        card_id: i64,
    ) -> Result<PlayOutcome, AppError> {
        debug!(user_id, round_id, card_id, "Playing card");
        let (round, game) = load_open_round(txn, round_id).await?;
        let dealing = dealings::require_for_user(txn, round.id, user_id).await?;

        let played_card = cards::require_card(txn, card_id).await?;
        if played_card.dealing_id != dealing.id || played_card.entry_id.is_some() {
            return Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("Card {card_id} is not in the hand of user {user_id}"),
            )
            .into());
        }

        let round_dealings = dealings::list_by_round(txn, round.id).await?;
        if round_dealings.iter().any(|d| d.bid.is_none()) {
            return Err(DomainError::validation(
                ValidationKind::BiddingIncomplete,
                "Every player must bid before the first card",
            )
            .into());
        }
        let owner_of_dealing: HashMap<i64, i64> =
            round_dealings.iter().map(|d| (d.id, d.user_id)).collect();

        let open = entries::open_entry(txn, round.id).await?;
        let mut plays = match &open {
            Some(entry) => cards::cards_by_entry(txn, entry.id)
                .await?
                .into_iter()
                .map(|c| {
                    owner_of_dealing
                        .get(&c.dealing_id)
                        .map(|uid| TrickPlay {
                            user_id: *uid,
                            card: c.card,
                        })
                        .ok_or_else(|| AppError::internal("Played card has no dealing in round"))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let leader = match plays.first() {
            Some(first) => first.user_id,
            None => match entries::last_finished(txn, round.id).await? {
                Some(previous) => previous.owner_id,
                None => round.opening_player_id,
            },
        };
        self.check_turn(txn, game.id, leader, plays.len(), user_id)
            .await?;

        let hand: Vec<Card> = cards::hand(txn, dealing.id)
            .await?
            .into_iter()
            .map(|c| c.card)
            .collect();
        validate_play(&hand, played_card.card, lead_suit(&plays), round.trump.suit())?;

        let entry = entries::get_or_create_entry(txn, round.id, user_id).await?;
        cards::assign_to_entry(txn, played_card.id, entry.id, (plays.len() + 1) as i16).await?;
        plays.push(TrickPlay {
            user_id,
            card: played_card.card,
        });

        let owner = trick_owner(&plays, round.trump.suit()).unwrap_or(user_id);
        entries::set_owner(txn, entry.id, owner).await?;
        debug!(
            round_id,
            entry_id = entry.id,
            card = %played_card.card,
            owner,
            "Card played"
        );

        if plays.len() < usize::from(game.players_number) {
            return Ok(PlayOutcome::Played {
                entry_id: entry.id,
                owner_id: owner,
            });
        }

        entries::finish(txn, entry.id).await?;
        info!(round_id, entry_id = entry.id, winner = owner, "Trick completed");

        if cards::count_unplayed_in_round(txn, round.id).await? > 0 {
            return Ok(PlayOutcome::TrickCompleted {
                entry_id: entry.id,
                winner_id: owner,
            });
        }

        self.actualize_round(txn, round.id).await?;
        match self.advance_round(txn, &round).await? {
            Some(next) => Ok(PlayOutcome::RoundAdvanced {
                entry_id: entry.id,
                winner_id: owner,
                scored_round_id: round.id,
                next_round_id: next.id,
            }),
            None => {
                let result = self.finish_game(txn, game.id, round.id).await?;
                Ok(PlayOutcome::GameFinished(result))
            }
        }
    }

    /// Reject the play unless `user_id` sits at the seat whose turn it is.
    async fn check_turn(
        &self,
        txn: &DatabaseTransaction,
        game_id: i64,
        leader: i64,
        played: usize,
        user_id: i64,
    ) -> Result<(), AppError> {
        let roster = players::roster(txn, game_id).await?;
        let leader_seat = roster
            .iter()
            .position(|s| s.user_id == leader)
            .ok_or_else(|| AppError::internal("Trick leader is not seated in this game"))?;
        let expected = roster[next_seat(leader_seat, played, roster.len())].user_id;
        if expected != user_id {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("Not your turn: waiting for user {expected}"),
            )
            .into());
        }
        Ok(())
    }
}
