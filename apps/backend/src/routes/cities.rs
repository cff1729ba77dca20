//! `/api/cities` handlers.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::{CityDraft, CityPatchDraft, PageRequest};
use crate::error::AppError;
use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::http::envelope;
use crate::services::cities::CityService;
use crate::state::app_state::AppState;

/// `limit` stays a string so a non-numeric value gets the limit message
/// rather than a generic query error.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub cursor: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
struct Deleted {
    id: String,
}

async fn create_city(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CityDraft>,
) -> Result<HttpResponse, AppError> {
    let city = CityService::new()
        .create(Some(&req), &app_state, body.into_inner())
        .await?;
    Ok(envelope::created(city))
}

async fn list_cities(
    app_state: web::Data<AppState>,
    query: ValidatedQuery<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let ListQuery { cursor, limit } = query.into_inner();
    let page = PageRequest::parse(cursor, limit.as_deref())?;
    let result = CityService::new().list(&app_state, page).await?;
    Ok(envelope::ok(result))
}

async fn search_cities(
    app_state: web::Data<AppState>,
    query: ValidatedQuery<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let cities = CityService::new()
        .search(&app_state, query.name.as_deref())
        .await?;
    Ok(envelope::ok(cities))
}

async fn get_city(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let city = CityService::new().get(&app_state, &path).await?;
    Ok(envelope::ok(city))
}

async fn update_city(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: ValidatedJson<CityPatchDraft>,
) -> Result<HttpResponse, AppError> {
    let city = CityService::new()
        .update(Some(&req), &app_state, &path, body.into_inner())
        .await?;
    Ok(envelope::ok(city))
}

async fn delete_city(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = CityService::new()
        .delete(Some(&req), &app_state, &path)
        .await?;
    Ok(envelope::ok(Deleted { id }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // "/search" must be registered before "/{id}" or it is captured as an id
    cfg.service(
        web::resource("")
            .route(web::post().to(create_city))
            .route(web::get().to(list_cities)),
    );
    cfg.service(web::resource("/search").route(web::get().to(search_cities)));
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_city))
            .route(web::put().to(update_city))
            .route(web::delete().to(delete_city)),
    );
}
