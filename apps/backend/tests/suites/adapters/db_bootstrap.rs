use cities_backend::config::db::DbSettings;
use cities_backend::domain::NewCity;
use cities_backend::infra::db::connect_db;
use cities_backend::repos::cities as cities_repo;
use migration::count_applied_migrations;
use sea_orm::{ConnectionTrait, DbBackend, Statement};

use crate::support::factory::new_city;

fn sample() -> NewCity {
    new_city("Persistville")
}

#[tokio::test]
async fn file_database_uses_wal_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cities.db");

    let conn = connect_db(&DbSettings::file(&path)).await.unwrap();
    let row = conn
        .query_one(Statement::from_string(
            DbBackend::Sqlite,
            "PRAGMA journal_mode".to_string(),
        ))
        .await
        .unwrap()
        .unwrap();
    let mode: String = row.try_get("", "journal_mode").unwrap();
    assert_eq!(mode.to_lowercase(), "wal");

    let created = cities_repo::create_city(&conn, sample()).await.unwrap();
    conn.close().await.unwrap();

    let reopened = connect_db(&DbSettings::file(&path)).await.unwrap();
    let found = cities_repo::find_city(&reopened, &created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Persistville");
    assert_eq!(count_applied_migrations(&reopened).await.unwrap(), 1);
}

#[tokio::test]
async fn migrations_are_idempotent_on_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twice.db");

    for _ in 0..2 {
        let conn = connect_db(&DbSettings::file(&path)).await.unwrap();
        assert_eq!(count_applied_migrations(&conn).await.unwrap(), 1);
        conn.close().await.unwrap();
    }
}

#[tokio::test]
async fn memory_databases_are_isolated() {
    let a = connect_db(&DbSettings::memory()).await.unwrap();
    let b = connect_db(&DbSettings::memory()).await.unwrap();

    cities_repo::create_city(&a, sample()).await.unwrap();

    assert_eq!(cities_repo::count_cities(&a).await.unwrap(), 1);
    assert_eq!(cities_repo::count_cities(&b).await.unwrap(), 0);
}

#[tokio::test]
async fn unopenable_path_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("cities.db");

    let err = connect_db(&DbSettings::file(&path)).await.unwrap_err();
    assert!(err.to_string().contains("failed to open database"));
}
