//! Cursor pagination over id-ordered rows.

use serde::Serialize;

use crate::errors::domain::{DomainError, ValidationKind};

pub const DEFAULT_PAGE_LIMIT: u64 = 10;
pub const MAX_PAGE_LIMIT: u64 = 100;

pub const LIMIT_MESSAGE: &str = "Limit must be between 1 and 100";

/// A validated page request: rows strictly after `cursor`, at most `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub cursor: Option<String>,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            cursor: None,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build from raw query values. An empty cursor means "first page";
    /// a limit that is not an integer in 1..=100 is rejected.
    pub fn parse(cursor: Option<String>, limit_raw: Option<&str>) -> Result<Self, DomainError> {
        let cursor = cursor.filter(|c| !c.trim().is_empty());
        let limit = match limit_raw {
            None => DEFAULT_PAGE_LIMIT,
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|n| (1..=MAX_PAGE_LIMIT as i64).contains(n))
                .map(|n| n as u64)
                .ok_or_else(|| DomainError::validation(ValidationKind::Limit, LIMIT_MESSAGE))?,
        };
        Ok(Self { cursor, limit })
    }

    /// Rows to fetch so the presence of a next page can be detected.
    pub fn fetch_size(&self) -> u64 {
        self.limit + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
    pub count: usize,
}

impl<T> Page<T> {
    /// Turn a `limit + 1` fetch into a page. The extra row only signals
    /// that more data exists; it is not returned.
    pub fn from_overfetch(mut rows: Vec<T>, limit: u64, cursor_of: impl Fn(&T) -> String) -> Self {
        let limit = limit as usize;
        let has_more = rows.len() > limit;
        rows.truncate(limit);
        let next_cursor = if has_more {
            rows.last().map(&cursor_of)
        } else {
            None
        };
        let count = rows.len();
        Self {
            items: rows,
            next_cursor,
            has_more,
            count,
        }
    }
}
