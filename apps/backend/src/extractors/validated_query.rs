use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Query-string extractor whose failures become envelope 400s.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> ValidatedQuery<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedQuery<T>
where
    T: DeserializeOwned,
{
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = web::Query::<T>::from_query(req.query_string())
            .map(|q| ValidatedQuery(q.into_inner()))
            .map_err(|e| {
                debug!(error = %e, query = req.query_string(), "query parsing failed");
                AppError::bad_request(ErrorCode::BadRequest, "Invalid query string")
            });
        ready(result)
    }
}
