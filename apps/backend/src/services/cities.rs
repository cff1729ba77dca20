//! City use cases. Reads go straight to the pool; writes run in a
//! transaction via `with_txn`.

use actix_web::HttpRequest;
use tracing::{debug, info};

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::{CityDraft, CityPatchDraft, Page, PageRequest};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::cities::{self as cities_repo, City};
use crate::services::enrichment::EnrichedCity;
use crate::state::app_state::AppState;

pub const SEARCH_NAME_REQUIRED: &str = "City name is required";

pub struct CityService;

impl CityService {
    pub fn new() -> Self {
        Self
    }

    pub async fn create(
        &self,
        req: Option<&HttpRequest>,
        state: &AppState,
        draft: CityDraft,
    ) -> Result<City, AppError> {
        let new_city = draft.validate()?;
        let city = with_txn(req, state, |txn| {
            Box::pin(async move { Ok(cities_repo::create_city(txn, new_city).await?) })
        })
        .await?;
        info!(city_id = %city.id, name = %city.name, "city created");
        Ok(city)
    }

    pub async fn list(&self, state: &AppState, page: PageRequest) -> Result<Page<City>, AppError> {
        let db = require_db(state)?;
        Ok(cities_repo::list_cities(db, &page).await?)
    }

    pub async fn get(&self, state: &AppState, id: &str) -> Result<EnrichedCity, AppError> {
        let db = require_db(state)?;
        let city = cities_repo::find_city(db, id)
            .await?
            .ok_or_else(DomainError::city_not_found)?;
        Ok(state.enricher().enrich(city).await)
    }

    pub async fn update(
        &self,
        req: Option<&HttpRequest>,
        state: &AppState,
        id: &str,
        draft: CityPatchDraft,
    ) -> Result<City, AppError> {
        let patch = draft.validate()?;
        if patch.is_empty() {
            debug!(city_id = %id, "update carries no fields; only updatedAt changes");
        }
        let id_owned = id.to_string();
        let updated = with_txn(req, state, |txn| {
            Box::pin(async move { Ok(cities_repo::update_city(txn, &id_owned, patch).await?) })
        })
        .await?;
        let city = updated.ok_or_else(DomainError::city_not_found)?;
        info!(city_id = %city.id, "city updated");
        Ok(city)
    }

    pub async fn delete(
        &self,
        req: Option<&HttpRequest>,
        state: &AppState,
        id: &str,
    ) -> Result<String, AppError> {
        let id_owned = id.to_string();
        let removed = with_txn(req, state, |txn| {
            Box::pin(async move { Ok(cities_repo::delete_city(txn, &id_owned).await?) })
        })
        .await?;
        if !removed {
            return Err(DomainError::city_not_found().into());
        }
        info!(city_id = %id, "city deleted");
        Ok(id.to_string())
    }

    pub async fn search(
        &self,
        state: &AppState,
        name: Option<&str>,
    ) -> Result<Vec<EnrichedCity>, AppError> {
        let needle = name.filter(|n| !n.is_empty()).ok_or_else(|| {
            DomainError::validation(ValidationKind::SearchName, SEARCH_NAME_REQUIRED)
        })?;
        let db = require_db(state)?;
        let cities = cities_repo::search_cities(db, needle).await?;
        Ok(state.enricher().enrich_all(cities).await)
    }
}

impl Default for CityService {
    fn default() -> Self {
        Self::new()
    }
}
