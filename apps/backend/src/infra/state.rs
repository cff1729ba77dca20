use crate::config::db::{DbProfile, DbSettings};
use crate::config::enrichment::EnrichmentConfig;
use crate::error::AppError;
use crate::infra::db::{bootstrap_db, connect_db};
use crate::services::enrichment::Enricher;
use crate::state::app_state::AppState;

enum DbChoice {
    None,
    Profile(DbProfile),
    Settings(DbSettings),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db: DbChoice,
    enricher: Enricher,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db: DbChoice::None,
            enricher: Enricher::disabled(),
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db = DbChoice::Profile(profile);
        self
    }

    pub fn with_db_settings(mut self, settings: DbSettings) -> Self {
        self.db = DbChoice::Settings(settings);
        self
    }

    pub fn with_enricher(mut self, enricher: Enricher) -> Self {
        self.enricher = enricher;
        self
    }

    /// Real HTTP-backed enrichment on a shared client.
    pub fn with_enrichment_config(self, config: &EnrichmentConfig, http: reqwest::Client) -> Self {
        let enricher = config.build_enricher(http);
        self.with_enricher(enricher)
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let db = match self.db {
            DbChoice::None => None,
            DbChoice::Profile(profile) => Some(bootstrap_db(profile).await?),
            DbChoice::Settings(settings) => Some(connect_db(&settings).await?),
        };
        Ok(AppState::from_parts(db, self.enricher))
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
