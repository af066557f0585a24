use crate::domain::model::OPEN_ENDED;
use crate::utils::error::{PairError, Result};
use chrono::NaiveDate;

/// Parses a raw date cell. The `NULL` sentinel resolves to `now`.
pub fn normalize(raw: &str, now: NaiveDate, format: &str) -> Result<NaiveDate> {
    let value = raw.trim();
    if value == OPEN_ENDED {
        return Ok(now);
    }

    NaiveDate::parse_from_str(value, format).map_err(|e| PairError::DateParseError {
        value: raw.to_string(),
        format: format.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_iso_date() {
        let date = normalize("2020-01-05", now(), "%Y-%m-%d").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 5).unwrap());
    }

    #[test]
    fn test_sentinel_resolves_to_now() {
        assert_eq!(normalize("NULL", now(), "%Y-%m-%d").unwrap(), now());
        assert_eq!(normalize(" NULL ", now(), "%Y-%m-%d").unwrap(), now());
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        assert!(normalize("null", now(), "%Y-%m-%d").is_err());
    }

    #[test]
    fn test_custom_format() {
        let date = normalize("05/01/2020", now(), "%d/%m/%Y").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 5).unwrap());
    }

    #[test]
    fn test_malformed_date() {
        let err = normalize("2020-13-01", now(), "%Y-%m-%d").unwrap_err();
        match err {
            PairError::DateParseError { value, format, .. } => {
                assert_eq!(value, "2020-13-01");
                assert_eq!(format, "%Y-%m-%d");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(normalize("", now(), "%Y-%m-%d").is_err());
    }
}
