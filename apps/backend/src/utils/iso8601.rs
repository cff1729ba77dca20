//! Millisecond-precision ISO-8601 formatting shared by timestamps and
//! `dateEstablished`.

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Format as `[-]YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC.
///
/// # Example
/// ```
/// use cities_backend::utils::iso8601::format_millis;
/// use time::macros::datetime;
///
/// assert_eq!(
///     format_millis(datetime!(2020-01-01 12:30:00.123456 UTC)),
///     "2020-01-01T12:30:00.123Z"
/// );
/// ```
pub fn format_millis(ts: OffsetDateTime) -> String {
    let utc = ts.to_offset(UtcOffset::UTC);
    utc.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .unwrap_or_else(|_| utc.to_string())
}

/// Current time, formatted for the response envelope.
pub fn now_millis() -> String {
    format_millis(OffsetDateTime::now_utc())
}

/// `#[serde(serialize_with = ...)]` helper for server-set timestamps.
pub mod serde_millis {
    use serde::Serializer;
    use time::OffsetDateTime;

    pub fn serialize<S: Serializer>(ts: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_millis(*ts))
    }
}
