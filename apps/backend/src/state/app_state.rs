use sea_orm::DatabaseConnection;

use crate::services::enrichment::Enricher;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Country/weather lookups joined into detail and search responses
    enricher: Enricher,
}

impl AppState {
    pub fn new(db: DatabaseConnection, enricher: Enricher) -> Self {
        Self::from_parts(Some(db), enricher)
    }

    pub fn from_parts(db: Option<DatabaseConnection>, enricher: Enricher) -> Self {
        Self { db, enricher }
    }

    /// State with no database and placeholder enrichment
    pub fn new_without_db() -> Self {
        Self::from_parts(None, Enricher::disabled())
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn enricher(&self) -> &Enricher {
        &self.enricher
    }
}
