//! Circular roster rotation for dealer and opening-player roles.

use rand::Rng;

use crate::errors::domain::{DomainError, ValidationKind};

/// Endless cyclic iterator over roster indices, starting at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRotation {
    len: usize,
    cursor: usize,
}

impl TurnRotation {
    pub fn new(len: usize, start: usize) -> Result<Self, DomainError> {
        if len == 0 || start >= len {
            return Err(DomainError::validation(
                ValidationKind::Other("Rotation".into()),
                format!("Rotation start {start} is outside a roster of {len}"),
            ));
        }
        Ok(Self { len, cursor: start })
    }

    /// Start at a uniformly random roster index.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, DomainError> {
        if len == 0 {
            return Self::new(len, 0);
        }
        Self::new(len, rng.random_range(0..len))
    }

    pub fn start(&self) -> usize {
        self.cursor
    }
}

impl Iterator for TurnRotation {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.cursor;
        self.cursor = (self.cursor + 1) % self.len;
        Some(current)
    }
}

/// Roster indices holding the dealer and opening-player roles for one round.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RoundRoles {
    pub dealer: usize,
    pub opener: usize,
}

/// Assign roles for `rounds` consecutive rounds.
///
/// The first round takes two steps of the rotation. Every later round hands
/// the dealer role to the previous opener and takes one more step for the new
/// opener.
pub fn assign_roles(mut rotation: TurnRotation, rounds: usize) -> Vec<RoundRoles> {
    let mut roles = Vec::with_capacity(rounds);
    let mut previous_opener: Option<usize> = None;
    for _ in 0..rounds {
        let dealer = match previous_opener {
            Some(opener) => opener,
            None => rotation.next().unwrap_or_default(),
        };
        let opener = rotation.next().unwrap_or_default();
        roles.push(RoundRoles { dealer, opener });
        previous_opener = Some(opener);
    }
    roles
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;

    #[test]
    fn rotation_wraps_around_roster() {
        let rotation = TurnRotation::new(3, 2).unwrap();
        let seen: Vec<usize> = rotation.take(7).collect();
        assert_eq!(seen, vec![2, 0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn opener_becomes_next_dealer() {
        let roles = assign_roles(TurnRotation::new(4, 1).unwrap(), 5);
        assert_eq!(roles[0], RoundRoles { dealer: 1, opener: 2 });
        assert_eq!(roles[1], RoundRoles { dealer: 2, opener: 3 });
        assert_eq!(roles[2], RoundRoles { dealer: 3, opener: 0 });
        for pair in roles.windows(2) {
            assert_eq!(pair[1].dealer, pair[0].opener);
        }
    }

    #[test]
    fn two_players_alternate_roles() {
        let roles = assign_roles(TurnRotation::new(2, 0).unwrap(), 4);
        let dealers: Vec<usize> = roles.iter().map(|r| r.dealer).collect();
        let openers: Vec<usize> = roles.iter().map(|r| r.opener).collect();
        assert_eq!(dealers, vec![0, 1, 0, 1]);
        assert_eq!(openers, vec![1, 0, 1, 0]);
    }

    #[test]
    fn random_start_is_within_roster_and_reproducible() {
        let mut a = ChaCha20Rng::seed_from_u64(11);
        let mut b = ChaCha20Rng::seed_from_u64(11);
        let ra = TurnRotation::random(5, &mut a).unwrap();
        let rb = TurnRotation::random(5, &mut b).unwrap();
        assert!(ra.start() < 5);
        assert_eq!(ra.start(), rb.start());
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert!(TurnRotation::new(0, 0).is_err());
        assert!(TurnRotation::new(3, 3).is_err());
    }
}
