//! Typed access to environment variables.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::AppError;

/// Value of `name`, or `None` when unset or blank.
pub fn opt_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn var_or(name: &str, default: &str) -> String {
    opt_var(name).unwrap_or_else(|| default.to_string())
}

/// Parse `name` as `T`, falling back to `default` when unset. A set but
/// unparsable value is a configuration error, never silently defaulted.
pub fn parse_var_or<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match opt_var(name) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| AppError::config(format!("{name}='{raw}' is invalid: {e}"))),
    }
}
