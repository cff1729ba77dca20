use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod cities;
pub mod health;

async fn route_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::NotFound, "Route not found"))
}

/// Register every route. `main.rs` and the test harness both call this so
/// tests exercise production routing.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // City routes: /api/cities/**
    cfg.service(web::scope("/api/cities").configure(cities::configure_routes));

    cfg.default_service(web::to(route_not_found));
}
