//! RNG seed derivation utilities for deterministic game behavior.
//!
//! A game stores a single base seed; every random decision derives its own
//! stream from it so replays of the same seed deal identically.

/// Seed for dealing the round at `sequence_number`.
pub fn derive_dealing_seed(game_seed: i64, sequence_number: i16) -> u64 {
    let base = game_seed as u64;
    base.wrapping_add((sequence_number as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Seed for choosing where the dealer rotation starts.
pub fn derive_rotation_seed(game_seed: i64) -> u64 {
    (game_seed as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1)
}
