//! Bid bounds enforced at the request boundary before a bid reaches the engine.

use std::ops::RangeInclusive;

pub fn valid_bid_range(hand_size: u8) -> RangeInclusive<u8> {
    0..=hand_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bid_range_matches_hand_size() {
        assert_eq!(valid_bid_range(1), 0..=1);
        assert!(valid_bid_range(9).contains(&9));
        assert!(!valid_bid_range(9).contains(&10));
    }
}
