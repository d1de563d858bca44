use sea_orm::DatabaseConnection;

use super::round_locks::RoundLocks;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Serializes bids and plays against the same round
    pub round_locks: RoundLocks,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            round_locks: RoundLocks::default(),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
