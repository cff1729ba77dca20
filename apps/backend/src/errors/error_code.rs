//! Error codes for the cities API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Codes are SCREAMING_SNAKE_CASE and appear in logs next to every failed
//! request.

use core::fmt;

/// Centralized error codes for the cities API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Body or field failed validation
    ValidationError,
    /// Malformed request (bad JSON, bad query string)
    BadRequest,
    /// Pagination limit outside [1, 100] or not an integer
    InvalidLimit,
    /// Search without a name
    MissingSearchName,
    /// dateEstablished is not a usable ISO-8601 date-time
    InvalidDate,

    // Resource Not Found
    /// City not found
    CityNotFound,
    /// Route not found
    NotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Stored row violates domain invariants
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidLimit => "INVALID_LIMIT",
            Self::MissingSearchName => "MISSING_SEARCH_NAME",
            Self::InvalidDate => "INVALID_DATE",

            Self::CityNotFound => "CITY_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
