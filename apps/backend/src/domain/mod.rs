//! Domain layer: pure game logic types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod rating;
pub mod rotation;
pub mod round_plan;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_tricks;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit, Trump};
pub use dealing::{deal_round, deal_round_seeded, DealtRound};
pub use deck::all_cards;
pub use rotation::{assign_roles, RoundRoles, TurnRotation};
pub use round_plan::RoundShape;
pub use seed_derivation::{derive_dealing_seed, derive_rotation_seed};
pub use tricks::TrickPlay;
