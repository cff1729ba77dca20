use std::path::PathBuf;
use std::time::Duration;

use super::env::{parse_var_or, var_or};
use crate::error::AppError;

pub const DEFAULT_DB_PATH: &str = "./dev.db";
pub const DEFAULT_POOL_MAX: u32 = 5;
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// File database from `CITIES_DB_PATH`
    Prod,
    /// Private in-memory database, gone when the pool closes
    Test,
}

/// Where the database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub target: DbTarget,
    pub pool_max: u32,
    pub busy_timeout: Duration,
}

impl DbSettings {
    pub fn from_env(profile: DbProfile) -> Result<Self, AppError> {
        match profile {
            DbProfile::Test => Ok(Self::memory()),
            DbProfile::Prod => {
                let pool_max: u32 = parse_var_or("CITIES_DB_POOL_MAX", DEFAULT_POOL_MAX)?;
                if pool_max == 0 {
                    return Err(AppError::config("CITIES_DB_POOL_MAX must be at least 1"));
                }
                Ok(Self {
                    pool_max,
                    ..Self::file(var_or("CITIES_DB_PATH", DEFAULT_DB_PATH))
                })
            }
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            target: DbTarget::File(path.into()),
            pool_max: DEFAULT_POOL_MAX,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// In-memory databases are per-connection, so the pool holds exactly one.
    pub fn memory() -> Self {
        Self {
            target: DbTarget::Memory,
            pool_max: 1,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}
