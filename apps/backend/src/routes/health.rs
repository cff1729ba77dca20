//! `GET /health`: liveness plus a database probe. Always 200; the `db`
//! field says whether SQLite answered. Not wrapped in the API envelope.

use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;

use crate::db::require_db;
use crate::state::app_state::AppState;
use crate::utils::iso8601::now_millis;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

/// Result of pinging the database and reading the migration table.
struct DbProbe {
    error: Option<String>,
    migrations: String,
}

impl DbProbe {
    fn failed(error: String) -> Self {
        Self {
            error: Some(error),
            migrations: "unknown".to_string(),
        }
    }

    async fn run(db: &DatabaseConnection) -> Self {
        let ping = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
        if let Err(e) = db.query_one(ping).await {
            return Self::failed(format!("DB query failed: {e}"));
        }

        let migrations = match get_latest_migration_version(db).await {
            Ok(Some(version)) => version,
            Ok(None) => "no_migrations".to_string(),
            Err(_) => "unknown".to_string(),
        };
        Self {
            error: None,
            migrations,
        }
    }
}

async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let probe = match require_db(&app_state) {
        Ok(db) => DbProbe::run(db).await,
        Err(e) => DbProbe::failed(format!("DB unavailable: {e}")),
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: if probe.error.is_none() { "ok" } else { "error" },
        db_error: probe.error,
        migrations: probe.migrations,
        time: now_millis(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
