//! # Wire Date Format
//!
//! Every date that crosses the API boundary is a string in the form
//! `dd/MM/yyyy HH:mm` (e.g. `09/03/2025 15:00`). Internally timestamps are
//! `DateTime<Utc>`; wire values are read and written as UTC wall-clock time,
//! truncated to the minute.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// `strftime` pattern for wire dates.
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Formats a timestamp for the wire.
pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Parses a wire date.
///
/// `field` names the request field in the error so clients know which
/// value was rejected.
pub fn parse_date_time(field: &str, value: &str) -> ValidationResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value.trim(), DATE_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| ValidationError::invalid_format(field, "use o formato dd/MM/yyyy HH:mm"))
}

/// Parses an optional wire date. Absent or empty strings are `None`.
pub fn parse_optional_date_time(
    field: &str,
    value: Option<&str>,
) -> ValidationResult<Option<DateTime<Utc>>> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => parse_date_time(field, v).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_format() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 9, 15, 0, 42).unwrap();
        assert_eq!(format_date_time(&ts), "09/03/2025 15:00");
    }

    #[test]
    fn test_parse() {
        let ts = parse_date_time("dataLimite", "31/12/2025 23:59").unwrap();
        assert_eq!(ts.year(), 2025);
        assert_eq!(ts.month(), 12);
        assert_eq!(ts.day(), 31);
        assert_eq!(ts.hour(), 23);
        assert_eq!(ts.minute(), 59);
        assert_eq!(format_date_time(&ts), "31/12/2025 23:59");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        let err = parse_date_time("dataLimite", "2025-12-31T23:59:00").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "dataLimite"));
        assert!(parse_date_time("dataLimite", "32/01/2025 10:00").is_err());
        assert!(parse_date_time("dataLimite", "").is_err());
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(parse_optional_date_time("dataLimite", None).unwrap(), None);
        assert_eq!(parse_optional_date_time("dataLimite", Some("  ")).unwrap(), None);
        assert!(parse_optional_date_time("dataLimite", Some("01/01/2026 08:30"))
            .unwrap()
            .is_some());
        assert!(parse_optional_date_time("dataLimite", Some("amanhã")).is_err());
    }
}
