use trumps_backend::config::db::DbKind;
use trumps_backend::infra::state::build_state;
use trumps_backend::state::app_state::AppState;

/// Fresh, migrated in-memory database per call.
pub async fn memory_state() -> AppState {
    build_state()
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("build in-memory test state")
}
