use std::path::PathBuf;

use cities_backend::config::db::DEFAULT_DB_PATH;
use cities_backend::config::env::var_or;
use cities_backend::infra::db::connect_db;
use cities_backend::seed::{catalogue, seed};
use cities_backend::DbSettings;
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "seed-cli")]
#[command(about = "Seed the cities database with well-known world cities")]
struct Args {
    /// SQLite file to seed (defaults to CITIES_DB_PATH, then ./dev.db)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Report what would be inserted without writing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("info,sqlx=warn,sea_orm=warn")
        .init();

    let args = Args::parse();
    let path = args
        .db_path
        .unwrap_or_else(|| PathBuf::from(var_or("CITIES_DB_PATH", DEFAULT_DB_PATH)));

    let conn = match connect_db(&DbSettings::file(&path)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(db = %path.display(), error = %e, "could not open database");
            std::process::exit(1);
        }
    };

    let cities = match catalogue() {
        Ok(cities) => cities,
        Err(e) => {
            error!(error = %e, "built-in catalogue is invalid");
            std::process::exit(1);
        }
    };

    match seed(&conn, cities, args.dry_run).await {
        Ok(report) => {
            for name in &report.inserted {
                info!(city = %name, dry_run = args.dry_run, "insert");
            }
            info!(
                inserted = report.inserted.len(),
                skipped = report.skipped.len(),
                dry_run = args.dry_run,
                "done"
            );
        }
        Err(e) => {
            error!(error = %e, "seeding failed");
            std::process::exit(1);
        }
    }
}
