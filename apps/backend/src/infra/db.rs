//! Connection bootstrap: build the pool for a `DbKind`, then migrate it.

use std::str::FromStr;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::db::{db_url, max_connections, DbKind, RuntimeEnv};
use crate::error::AppError;

fn sqlx_err(context: &str, e: sqlx::Error) -> AppError {
    AppError::config(format!("{context}: {e}"))
}

/// Connect without running migrations.
pub async fn connect_db(kind: DbKind, env: RuntimeEnv) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind, env)?;
    let max = max_connections(kind)?;

    match kind {
        DbKind::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(max)
                .acquire_timeout(Duration::from_secs(5))
                .connect(&url)
                .await
                .map_err(|e| sqlx_err("connect postgres", e))?;
            Ok(SqlxPostgresConnector::from_sqlx_postgres_pool(pool))
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            let options = SqliteConnectOptions::from_str(&url)
                .map_err(|e| sqlx_err("parse sqlite url", e))?
                .foreign_keys(true);

            // An in-memory database disappears with its last connection, so the
            // single connection is never retired.
            let mut pool_options = SqlitePoolOptions::new().max_connections(max);
            if kind == DbKind::SqliteMemory {
                pool_options = pool_options
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None);
            }
            let pool = pool_options
                .connect_with(options)
                .await
                .map_err(|e| sqlx_err("connect sqlite", e))?;
            Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
        }
    }
}

/// Single entrypoint used by `StateBuilder`: connect, then bring the schema up.
pub async fn bootstrap_db(kind: DbKind, env: RuntimeEnv) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(kind, env).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(db_kind = ?kind, env = ?env, "database ready");
    Ok(conn)
}
