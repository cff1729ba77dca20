//! Pool construction and schema bootstrap.

use std::time::Instant;

use migration::migrate_up;
use sea_orm::{DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use tracing::info;

use crate::config::db::{DbProfile, DbSettings, DbTarget};
use crate::error::AppError;

fn connect_options(settings: &DbSettings) -> SqliteConnectOptions {
    let base = match &settings.target {
        DbTarget::File(path) => SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal),
        DbTarget::Memory => SqliteConnectOptions::new().in_memory(true),
    };
    base.foreign_keys(true).busy_timeout(settings.busy_timeout)
}

fn pool_options(settings: &DbSettings) -> SqlitePoolOptions {
    let opts = SqlitePoolOptions::new().max_connections(settings.pool_max.max(1));
    match settings.target {
        // Each in-memory connection is its own database; keep the single
        // connection alive for the life of the pool.
        DbTarget::Memory => opts
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None),
        DbTarget::File(_) => opts,
    }
}

/// Open the pool described by `settings` and migrate it. Does not retry.
pub async fn connect_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    let started = Instant::now();
    let pool = pool_options(settings)
        .connect_with(connect_options(settings))
        .await
        .map_err(|e| AppError::config(format!("failed to open database: {e}")))?;
    let conn = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);

    migrate_up(&conn)
        .await
        .map_err(|e| AppError::config(format!("schema migration failed: {e}")))?;

    let target = match &settings.target {
        DbTarget::File(path) => path.display().to_string(),
        DbTarget::Memory => ":memory:".to_string(),
    };
    info!(
        db = %target,
        pool_max = settings.pool_max,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "database ready"
    );
    Ok(conn)
}

/// Single entrypoint used by `StateBuilder`: settings from env, connect, migrate.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let settings = DbSettings::from_env(profile)?;
    connect_db(&settings).await
}
