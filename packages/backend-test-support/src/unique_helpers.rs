//! Test helpers for generating unique test data
//!
//! Tests share one database per binary in some suites, so names that are
//! searched for must not collide across tests.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("city");
/// let id2 = unique_str("city");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("city-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique city name that is safe to use as a `LIKE` search term.
///
/// ULIDs are Crockford base32, so the result never contains `%` or `_`.
pub fn unique_city_name(prefix: &str) -> String {
    format!("{prefix} {}", Ulid::new().to_string().to_lowercase())
}
