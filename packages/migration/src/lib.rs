pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Statement;
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20250901_000001_create_cities; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250901_000001_create_cities::Migration)]
    }
}

/// Bring the schema up to date. Idempotent; safe to call on every startup.
pub async fn migrate_up(db: &DatabaseConnection) -> Result<(), DbErr> {
    let file = database_file(db).await?;
    let defined = Migrator::migrations().len();
    let before = count_applied_migrations(db).await.unwrap_or(0);
    tracing::info!(db = %file, defined, applied = before, "schema=check");

    if let Err(e) = Migrator::up(db, None).await {
        tracing::error!(db = %file, error = %e, "schema=failed");
        return Err(e);
    }

    let after = count_applied_migrations(db).await?;
    tracing::info!(db = %file, applied = after, newly_applied = after - before.min(after), "schema=ready");
    Ok(())
}

/// Path of the main SQLite database, or `:memory:`.
async fn database_file(db: &DatabaseConnection) -> Result<String, DbErr> {
    let stmt = Statement::from_string(
        db.get_database_backend(),
        "SELECT file FROM pragma_database_list WHERE name = 'main'".to_string(),
    );
    let file = db
        .query_one(stmt)
        .await?
        .and_then(|row| row.try_get::<String>("", "file").ok());
    Ok(match file {
        Some(f) if f.is_empty() => ":memory:".to_string(),
        Some(f) => f,
        None => "<unknown>".to_string(),
    })
}

/// Applied migration names in application order. Empty before the
/// bookkeeping table exists.
async fn applied_names(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(applied) => Ok(applied.iter().map(|m| m.name().to_string()).collect()),
        Err(DbErr::Exec(_)) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    Ok(applied_names(db).await?.len())
}

/// Name of the latest applied migration, or None if nothing has been applied yet.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    Ok(applied_names(db).await?.pop())
}
