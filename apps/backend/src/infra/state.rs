use crate::config::db::{DbKind, RuntimeEnv};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_kind: DbKind,
    env: RuntimeEnv,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_kind: DbKind::SqliteMemory,
            env: RuntimeEnv::Test,
        }
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = kind;
        self
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let conn = bootstrap_db(self.db_kind, self.env).await?;
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, Statement};

    use super::*;

    #[tokio::test]
    async fn memory_state_is_migrated() {
        let state = build_state().build().await.unwrap();
        let backend = state.db().get_database_backend();
        let row = state
            .db()
            .query_one(Statement::from_string(
                backend,
                "SELECT COUNT(*) AS n FROM games".to_string(),
            ))
            .await
            .unwrap()
            .unwrap();
        let n: i64 = row.try_get("", "n").unwrap();
        assert_eq!(n, 0);
    }
}
