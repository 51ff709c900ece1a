//! Date parsing for resource table columns.
//!
//! Timestamps written by the release and commit collectors use
//! `YYYY-MM-DD:HH-MM-SS`; hand-edited rows often carry a bare `YYYY-MM-DD`.

use chrono::{NaiveDate, NaiveDateTime};

/// Format used by collectors for `Latest Release`, `Last Modified`, etc.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d:%H-%M-%S";

/// Date-only fallback format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a resource date column, accepting a full timestamp or a bare date.
///
/// Returns `None` for empty or unrecognized input.
pub fn parse_resource_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT) {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parse a release timestamp. Only the full timestamp format is accepted.
pub fn parse_release_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_timestamp() {
        let parsed = parse_resource_date("2025-08-14:09-30-05").unwrap();
        assert_eq!(parsed.to_string(), "2025-08-14 09:30:05");
    }

    #[test]
    fn test_parse_bare_date_is_midnight() {
        let parsed = parse_resource_date(" 2025-08-14 ").unwrap();
        assert_eq!(parsed.to_string(), "2025-08-14 00:00:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_resource_date("").is_none());
        assert!(parse_resource_date("yesterday").is_none());
        assert!(parse_resource_date("14/08/2025").is_none());
    }

    #[test]
    fn test_release_timestamp_is_strict() {
        assert!(parse_release_timestamp("2025-08-14:09-30-05").is_some());
        assert!(parse_release_timestamp("2025-08-14").is_none());
    }
}
