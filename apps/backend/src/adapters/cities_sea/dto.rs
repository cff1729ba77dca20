//! DTOs for cities_sea adapter.

use time::OffsetDateTime;

/// DTO for inserting a new city row.
#[derive(Debug, Clone)]
pub struct CityCreate {
    pub id: String,
    pub name: String,
    pub state: String,
    pub country: String,
    pub tourist_rating: i32,
    pub date_established: String,
    pub estimated_population: i64,
    pub now: OffsetDateTime,
}

/// DTO for a partial update; `None` fields are left as stored.
#[derive(Debug, Clone, Default)]
pub struct CityUpdate {
    pub tourist_rating: Option<i32>,
    pub date_established: Option<String>,
    pub estimated_population: Option<i64>,
}

impl CityUpdate {
    pub fn with_tourist_rating(mut self, rating: i32) -> Self {
        self.tourist_rating = Some(rating);
        self
    }

    pub fn with_date_established(mut self, date: impl Into<String>) -> Self {
        self.date_established = Some(date.into());
        self
    }

    pub fn with_estimated_population(mut self, population: i64) -> Self {
        self.estimated_population = Some(population);
        self
    }
}
