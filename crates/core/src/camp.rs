//! Camp input validation and date handling.
//!
//! The wire DTO and the persistence entity live in the `db` crate; the rules
//! here are shared by both the handlers and the repository fakes.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::CoreError;
use crate::types::EventDate;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length for a camp moniker.
pub const MAX_MONIKER_LEN: usize = 50;

/// Minimum length for a camp name, when one is given.
pub const MIN_NAME_LEN: usize = 5;

/// Maximum length for a camp name.
pub const MAX_NAME_LEN: usize = 100;

/// Minimum camp length in days.
pub const MIN_LENGTH_DAYS: i32 = 1;

/// Maximum camp length in days.
pub const MAX_LENGTH_DAYS: i32 = 100;

/// Length assigned to a new camp whose DTO omits it.
pub const DEFAULT_LENGTH_DAYS: i32 = 1;

/* --------------------------------------------------------------------------
   Validation functions
   -------------------------------------------------------------------------- */

/// Validate a moniker: non-blank and within length limit.
pub fn validate_moniker(moniker: &str) -> Result<(), CoreError> {
    if moniker.trim().is_empty() {
        return Err(CoreError::Validation(
            "Moniker must not be empty".to_string(),
        ));
    }
    if moniker.chars().count() > MAX_MONIKER_LEN {
        return Err(CoreError::Validation(format!(
            "Moniker too long: {} chars (max {MAX_MONIKER_LEN})",
            moniker.chars().count()
        )));
    }
    Ok(())
}

/// Validate an optional camp name against the length bounds.
pub fn validate_name(name: Option<&str>) -> Result<(), CoreError> {
    let Some(name) = name else {
        return Ok(());
    };
    let len = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Name must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} chars, got {len}"
        )));
    }
    Ok(())
}

/// Validate an optional camp length in days.
pub fn validate_length(length: Option<i32>) -> Result<(), CoreError> {
    match length {
        Some(days) if !(MIN_LENGTH_DAYS..=MAX_LENGTH_DAYS).contains(&days) => {
            Err(CoreError::Validation(format!(
                "Length must be between {MIN_LENGTH_DAYS} and {MAX_LENGTH_DAYS} days, got {days}"
            )))
        }
        _ => Ok(()),
    }
}

/* --------------------------------------------------------------------------
   Dates
   -------------------------------------------------------------------------- */

/// Parse an event date from a query string value.
///
/// Accepts a plain `YYYY-MM-DD` date, an RFC 3339 timestamp with offset or
/// `Z`, or a local `YYYY-MM-DDTHH:MM:SS[.fff]` timestamp. The date is taken
/// as written; the time and any offset are discarded.
pub fn parse_event_date(raw: &str) -> Result<EventDate, CoreError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .map_err(|_| CoreError::Validation(format!("Invalid date '{raw}'")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn moniker_rejects_blank() {
        assert_matches!(validate_moniker("   "), Err(CoreError::Validation(_)));
        assert!(validate_moniker("ATL2024").is_ok());
    }

    #[test]
    fn moniker_rejects_overlong() {
        let long = "M".repeat(MAX_MONIKER_LEN + 1);
        assert_matches!(validate_moniker(&long), Err(CoreError::Validation(_)));
    }

    #[test]
    fn name_is_optional_but_bounded() {
        assert!(validate_name(None).is_ok());
        assert!(validate_name(Some("Atlanta Code Camp")).is_ok());
        assert_matches!(validate_name(Some("ATL")), Err(CoreError::Validation(_)));
    }

    #[test]
    fn length_bounds() {
        assert!(validate_length(None).is_ok());
        assert!(validate_length(Some(1)).is_ok());
        assert!(validate_length(Some(100)).is_ok());
        assert_matches!(validate_length(Some(0)), Err(CoreError::Validation(_)));
        assert_matches!(validate_length(Some(101)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn parses_plain_date() {
        let date = parse_event_date("2024-09-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
    }

    #[test]
    fn timestamp_is_truncated_to_date() {
        let date = parse_event_date("2024-09-01T13:45:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
    }

    #[test]
    fn rfc3339_timestamp_keeps_its_own_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(parse_event_date("2024-09-01T00:00:00Z").unwrap(), expected);
        assert_eq!(parse_event_date("2024-09-01T23:30:00-05:00").unwrap(), expected);
    }

    #[test]
    fn garbage_date_is_a_validation_error() {
        assert_matches!(parse_event_date("next tuesday"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn not_found_message_names_the_moniker() {
        let err = CoreError::camp_not_found("ATL2024");
        assert_eq!(err.to_string(), "Could not find camp with moniker of ATL2024");
    }
}
