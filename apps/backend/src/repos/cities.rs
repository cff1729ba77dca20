//! City repository functions for the domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::error;

use crate::adapters::cities_sea::{self as cities_adapter, CityCreate, CityUpdate};
use crate::domain::{CityPatch, EstablishedDate, NewCity, Page, PageRequest};
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::utils::ids::next_city_id;
use crate::utils::iso8601::serde_millis;

/// City domain model, serialized as the API representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub name: String,
    pub state: String,
    pub country: String,
    pub tourist_rating: i32,
    pub date_established: EstablishedDate,
    pub estimated_population: i64,
    #[serde(serialize_with = "serde_millis::serialize")]
    pub created_at: OffsetDateTime,
    #[serde(serialize_with = "serde_millis::serialize")]
    pub updated_at: OffsetDateTime,
}

pub async fn create_city<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    city: NewCity,
) -> Result<City, DomainError> {
    let row = cities_adapter::create_city(conn, to_create(city, OffsetDateTime::now_utc())).await?;
    City::try_from(row)
}

/// Bulk insert; every city gets a fresh id and the same timestamp.
pub async fn insert_cities<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    cities: Vec<NewCity>,
) -> Result<u64, DomainError> {
    let now = OffsetDateTime::now_utc();
    let dtos = cities.into_iter().map(|c| to_create(c, now)).collect();
    Ok(cities_adapter::insert_many(conn, dtos).await?)
}

pub async fn find_city<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<City>, DomainError> {
    cities_adapter::find_by_id(conn, id)
        .await?
        .map(City::try_from)
        .transpose()
}

pub async fn list_cities<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: &PageRequest,
) -> Result<Page<City>, DomainError> {
    let rows = cities_adapter::list_after(conn, page.cursor.as_deref(), page.fetch_size()).await?;
    let cities = rows
        .into_iter()
        .map(City::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Page::from_overfetch(cities, page.limit, |c| c.id.clone()))
}

pub async fn search_cities<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    needle: &str,
) -> Result<Vec<City>, DomainError> {
    cities_adapter::search_by_name(conn, needle)
        .await?
        .into_iter()
        .map(City::try_from)
        .collect()
}

/// Returns `None` when no city has this id.
pub async fn update_city<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    patch: CityPatch,
) -> Result<Option<City>, DomainError> {
    let mut dto = CityUpdate::default();
    if let Some(r) = patch.tourist_rating {
        dto = dto.with_tourist_rating(r);
    }
    if let Some(d) = patch.date_established {
        dto = dto.with_date_established(d.to_iso_string());
    }
    if let Some(p) = patch.estimated_population {
        dto = dto.with_estimated_population(p);
    }

    cities_adapter::update_city(conn, id, dto, OffsetDateTime::now_utc())
        .await?
        .map(City::try_from)
        .transpose()
}

/// Returns whether a row was removed.
pub async fn delete_city<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<bool, DomainError> {
    Ok(cities_adapter::delete_city(conn, id).await? > 0)
}

pub async fn existing_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    names: &[String],
) -> Result<Vec<String>, DomainError> {
    Ok(cities_adapter::existing_names(conn, names).await?)
}

pub async fn count_cities<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(cities_adapter::count_all(conn).await?)
}

fn to_create(city: NewCity, now: OffsetDateTime) -> CityCreate {
    CityCreate {
        id: next_city_id(),
        name: city.name,
        state: city.state,
        country: city.country,
        tourist_rating: city.tourist_rating,
        date_established: city.date_established.to_iso_string(),
        estimated_population: city.estimated_population,
        now,
    }
}

// Conversions between SeaORM models and domain models

impl TryFrom<crate::entities::cities::Model> for City {
    type Error = DomainError;

    fn try_from(model: crate::entities::cities::Model) -> Result<Self, Self::Error> {
        let date_established = EstablishedDate::parse(&model.date_established).map_err(|e| {
            error!(city_id = %model.id, error = %e, "Stored dateEstablished is unreadable");
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("city {} has an unreadable dateEstablished", model.id),
            )
        })?;

        Ok(Self {
            id: model.id,
            name: model.name,
            state: model.state,
            country: model.country,
            tourist_rating: model.tourist_rating,
            date_established,
            estimated_population: model.estimated_population,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
