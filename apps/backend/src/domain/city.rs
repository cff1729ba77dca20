//! City input rules.
//!
//! Request bodies arrive as drafts with every field optional so that a
//! missing field reports "X is required" instead of a generic JSON error.
//! Validation collects every problem and reports them together.

use serde::Deserialize;

use super::established::EstablishedDate;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Unvalidated create payload
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub tourist_rating: Option<i64>,
    #[serde(default)]
    pub date_established: Option<String>,
    #[serde(default)]
    pub estimated_population: Option<i64>,
}

/// Unvalidated update payload. name/state/country are not updatable and
/// are ignored if sent.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPatchDraft {
    #[serde(default)]
    pub tourist_rating: Option<i64>,
    #[serde(default)]
    pub date_established: Option<String>,
    #[serde(default)]
    pub estimated_population: Option<i64>,
}

/// A validated city ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub name: String,
    pub state: String,
    pub country: String,
    pub tourist_rating: i32,
    pub date_established: EstablishedDate,
    pub estimated_population: i64,
}

/// A validated partial update; `None` leaves the column untouched
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CityPatch {
    pub tourist_rating: Option<i32>,
    pub date_established: Option<EstablishedDate>,
    pub estimated_population: Option<i64>,
}

impl CityPatch {
    pub fn is_empty(&self) -> bool {
        self.tourist_rating.is_none()
            && self.date_established.is_none()
            && self.estimated_population.is_none()
    }
}

#[derive(Default)]
struct Problems(Vec<String>);

impl Problems {
    fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    fn required_text(&mut self, value: Option<String>, message: &str) -> Option<String> {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.push(message);
                None
            }
        }
    }

    fn collect<T>(&mut self, result: Result<T, DomainError>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(DomainError::Validation(_, detail)) => {
                self.push(detail);
                None
            }
            Err(other) => {
                self.push(other.to_string());
                None
            }
        }
    }

    fn finish(self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::Field,
                self.0.join("; "),
            ))
        }
    }
}

pub fn validate_rating(rating: i64) -> Result<i32, DomainError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating as i32)
    } else {
        Err(DomainError::validation(
            ValidationKind::Field,
            format!("touristRating must be between {MIN_RATING} and {MAX_RATING}"),
        ))
    }
}

pub fn validate_population(population: i64) -> Result<i64, DomainError> {
    if population > 0 {
        Ok(population)
    } else {
        Err(DomainError::validation(
            ValidationKind::Field,
            "estimatedPopulation must be a positive integer",
        ))
    }
}

impl CityDraft {
    pub fn validate(self) -> Result<NewCity, DomainError> {
        let mut problems = Problems::default();

        let name = problems.required_text(self.name, "City name is required");
        let state = problems.required_text(self.state, "State is required");
        let country = problems.required_text(self.country, "Country is required");

        let tourist_rating = match self.tourist_rating {
            Some(r) => problems.collect(validate_rating(r)),
            None => {
                problems.push("touristRating is required");
                None
            }
        };
        let date_established = match self.date_established {
            Some(d) => problems.collect(EstablishedDate::parse(&d)),
            None => {
                problems.push("dateEstablished is required");
                None
            }
        };
        let estimated_population = match self.estimated_population {
            Some(p) => problems.collect(validate_population(p)),
            None => {
                problems.push("estimatedPopulation is required");
                None
            }
        };

        problems.finish()?;

        match (
            name,
            state,
            country,
            tourist_rating,
            date_established,
            estimated_population,
        ) {
            (Some(name), Some(state), Some(country), Some(r), Some(d), Some(p)) => Ok(NewCity {
                name,
                state,
                country,
                tourist_rating: r,
                date_established: d,
                estimated_population: p,
            }),
            _ => Err(DomainError::validation(
                ValidationKind::Field,
                "Invalid city data",
            )),
        }
    }
}

impl CityPatchDraft {
    pub fn validate(self) -> Result<CityPatch, DomainError> {
        let mut problems = Problems::default();

        let patch = CityPatch {
            tourist_rating: self
                .tourist_rating
                .and_then(|r| problems.collect(validate_rating(r))),
            date_established: self
                .date_established
                .and_then(|d| problems.collect(EstablishedDate::parse(&d))),
            estimated_population: self
                .estimated_population
                .and_then(|p| problems.collect(validate_population(p))),
        };

        problems.finish()?;
        Ok(patch)
    }
}
