//! Round scoring: bid against tricks actually taken.

/// Score delta for one player's round.
pub fn round_delta(bid: u8, actual: u8) -> i32 {
    let (bid, actual) = (i32::from(bid), i32::from(actual));
    if bid == 0 && actual == 0 {
        5
    } else if actual == bid {
        10 * actual
    } else if actual > bid {
        actual
    } else {
        10 * (actual - bid)
    }
}

/// Cumulative score after this round, layered on the previous round's total.
pub fn cumulative_score(previous: Option<i32>, bid: u8, actual: u8) -> i32 {
    previous.unwrap_or(0) + round_delta(bid, actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_boundaries() {
        assert_eq!(round_delta(0, 0), 5);
        assert_eq!(round_delta(3, 3), 30);
        assert_eq!(round_delta(2, 4), 4);
        assert_eq!(round_delta(4, 1), -30);
    }

    #[test]
    fn zero_bid_taking_tricks_scores_the_tricks() {
        assert_eq!(round_delta(0, 2), 2);
    }

    #[test]
    fn missed_bid_of_one_with_zero_taken() {
        assert_eq!(round_delta(1, 0), -10);
    }

    #[test]
    fn cumulative_starts_from_zero() {
        assert_eq!(cumulative_score(None, 1, 1), 10);
        assert_eq!(cumulative_score(Some(42), 2, 0), 22);
    }
}
