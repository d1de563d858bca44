//! Per-round async locks.
//!
//! Every bid or play against a round runs while holding that round's lock, so
//! legality checks and owner recomputation always see the previous action's
//! committed state.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Debug, Clone, Default)]
pub struct RoundLocks {
    inner: Arc<DashMap<i64, Arc<Mutex<()>>>>,
}

impl RoundLocks {
    /// Wait for exclusive access to `round_id`.
    pub async fn acquire(&self, round_id: i64) -> OwnedMutexGuard<()> {
        // The map guard must be released before awaiting.
        let lock = self.inner.entry(round_id).or_default().clone();
        lock.lock_owned().await
    }

    /// Drop the entry for `round_id` when nobody holds or waits on it.
    pub fn release_if_idle(&self, round_id: i64) {
        self.inner
            .remove_if(&round_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.inner.len()
    }
}
