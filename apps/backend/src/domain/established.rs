//! `dateEstablished` parsing and normalization.
//!
//! Founding dates routinely fall before year 1 (Rome, -0753) so plain
//! RFC 3339, which stops at year 0000, is not enough. Accepted input:
//!
//! - RFC 3339 date-times: `1625-01-01T00:00:00.000Z`, `2020-01-01T05:00:00+05:00`
//! - a leading sign on a 4-digit year: `-0753-04-21T00:00:00.000Z`
//! - ISO-8601 expanded years (sign required): `+002020-01-01T00:00:00Z`
//!
//! Values are normalized to UTC and rendered as `[-]YYYY-MM-DDTHH:MM:SS.mmmZ`.

use std::fmt;

use serde::{Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use crate::errors::domain::{DomainError, ValidationKind};
use crate::utils::iso8601::format_millis;

pub const MIN_YEAR: i32 = -9998;
pub const MAX_YEAR: i32 = 9998;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EstablishedDate(OffsetDateTime);

impl EstablishedDate {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let raw = raw.trim();
        let invalid = || {
            DomainError::validation(
                ValidationKind::Date,
                format!("dateEstablished must be an ISO-8601 date-time, got '{raw}'"),
            )
        };

        let (negative, signed, unsigned) = match raw.as_bytes().first() {
            Some(b'-') => (true, true, &raw[1..]),
            Some(b'+') => (false, true, &raw[1..]),
            _ => (false, false, raw),
        };

        let year_len = unsigned.find('-').ok_or_else(invalid)?;
        let expanded_ok = signed && year_len == 6;
        if year_len != 4 && !expanded_ok {
            return Err(invalid());
        }
        let digits = &unsigned[..year_len];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let magnitude: i32 = digits.parse().map_err(|_| invalid())?;
        let year = if negative { -magnitude } else { magnitude };
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DomainError::validation(
                ValidationKind::Date,
                format!("dateEstablished year must be between {MIN_YEAR} and {MAX_YEAR}"),
            ));
        }

        // 2000 is a leap year, so Feb 29 survives the placeholder parse and
        // replace_year rejects it for non-leap target years.
        let placeholder = format!("2000{}", &unsigned[year_len..]);
        let parsed = OffsetDateTime::parse(&placeholder, &Rfc3339).map_err(|_| invalid())?;
        let dated = parsed.replace_year(year).map_err(|_| invalid())?;

        Ok(Self(dated.to_offset(UtcOffset::UTC)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn to_iso_string(&self) -> String {
        format_millis(self.0)
    }
}

impl fmt::Display for EstablishedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl Serialize for EstablishedDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}
