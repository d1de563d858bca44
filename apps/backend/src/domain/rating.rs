//! Rating updates at game end.
//!
//! `new = old + (final - max * 2/3) * 10`. The delta is evaluated exactly as
//! `10 * (3 * final - 2 * max) / 3` and rounded to the nearest integer; a
//! denominator of 3 never produces a half, so no tie-break is needed.

/// Highest final score, if anyone scored.
pub fn max_score(final_scores: &[(i64, i32)]) -> Option<i32> {
    final_scores.iter().map(|(_, score)| *score).max()
}

/// Every player whose final score equals the maximum; ties all win.
pub fn winners(final_scores: &[(i64, i32)]) -> Vec<i64> {
    let Some(max) = max_score(final_scores) else {
        return Vec::new();
    };
    final_scores
        .iter()
        .filter(|(_, score)| *score == max)
        .map(|(user_id, _)| *user_id)
        .collect()
}

pub fn elo_delta(final_score: i32, max_score: i32) -> i32 {
    let numerator = 10 * (3 * i64::from(final_score) - 2 * i64::from(max_score));
    let rounded = if numerator >= 0 {
        (numerator + 1) / 3
    } else {
        (numerator - 1) / 3
    };
    rounded as i32
}

pub fn new_elo(old_elo: i32, final_score: i32, max_score: i32) -> i32 {
    old_elo.saturating_add(elo_delta(final_score, max_score))
}
