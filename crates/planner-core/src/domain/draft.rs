//! Draft Normalization
//!
//! Form inputs are plain strings. These helpers turn them into payload
//! values: blank optional text becomes `None` (sent as `null`), numbers are
//! parsed, and blank required fields block the submit.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

use super::entity::{DomainError, DomainResult};

/// Date format used by `<input type="date">` and accepted by the backend
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn required_text(field: &'static str, value: &str) -> DomainResult<String> {
    optional_text(value).ok_or(DomainError::MissingField(field))
}

pub fn required_amount(field: &'static str, value: &str) -> DomainResult<f64> {
    optional_amount(field, value)?.ok_or(DomainError::MissingField(field))
}

pub fn optional_amount(field: &'static str, value: &str) -> DomainResult<Option<f64>> {
    let Some(text) = optional_text(value) else {
        return Ok(None);
    };
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or(DomainError::InvalidNumber { field, value: text })
}

/// Parse an integer field (capacity, rating).
pub fn optional_count(field: &'static str, value: &str) -> DomainResult<Option<u32>> {
    let Some(text) = optional_text(value) else {
        return Ok(None);
    };
    text.parse::<u32>()
        .map(Some)
        .map_err(|_| DomainError::InvalidNumber { field, value: text })
}

pub fn optional_date(field: &'static str, value: &str) -> DomainResult<Option<NaiveDate>> {
    let Some(text) = optional_text(value) else {
        return Ok(None);
    };
    NaiveDate::parse_from_str(&text, DATE_INPUT_FORMAT)
        .map(Some)
        .map_err(|_| DomainError::InvalidDate { field, value: text })
}

/// Render an amount back into an input value for edit mode
pub fn amount_input(value: f64) -> String {
    value.to_string()
}

pub fn optional_amount_input(value: Option<f64>) -> String {
    value.map(amount_input).unwrap_or_default()
}

pub fn optional_count_input(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn optional_date_input(value: Option<NaiveDateTime>) -> String {
    value
        .map(|d| d.date().format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse a server timestamp.
///
/// The backend stores naive UTC datetimes; dates submitted as plain
/// `YYYY-MM-DD` may come back unchanged, and some deployments add an offset.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Serde adapter for optional server timestamps
pub mod timestamp {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_some(&dt.format(DATETIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.is_empty() => Ok(None),
            Some(s) => parse_timestamp(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optional_text_is_none() {
        assert_eq!(optional_text(""), None);
        assert_eq!(optional_text("   "), None);
        assert_eq!(optional_text(" Rosa "), Some("Rosa".to_string()));
    }

    #[test]
    fn test_required_fields_block_when_empty() {
        assert_eq!(required_text("name", ""), Err(DomainError::MissingField("name")));
        assert_eq!(required_amount("planned_amount", " "), Err(DomainError::MissingField("planned_amount")));
        assert_eq!(required_amount("planned_amount", "1250.50"), Ok(1250.5));
    }

    #[test]
    fn test_numbers_that_do_not_parse_are_rejected() {
        assert!(matches!(optional_amount("price", "cheap"), Err(DomainError::InvalidNumber { .. })));
        assert!(matches!(optional_count("rating", "4.5"), Err(DomainError::InvalidNumber { .. })));
        assert_eq!(optional_count("rating", "4"), Ok(Some(4)));
        // No range check: the option set is the only constraint on ratings.
        assert_eq!(optional_count("rating", "9"), Ok(Some(9)));
    }

    #[test]
    fn test_dates() {
        assert_eq!(optional_date("due_date", ""), Ok(None));
        assert_eq!(optional_date("due_date", "2025-06-14"), Ok(NaiveDate::from_ymd_opt(2025, 6, 14)));
        assert!(optional_date("due_date", "14/06/2025").is_err());
    }

    #[test]
    fn test_parse_timestamp_accepts_server_shapes() {
        let expected = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2025-06-14T00:00:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-06-14T00:00:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2025-06-14"), Some(expected));
        assert_eq!(parse_timestamp("2025-06-14T02:00:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("soon"), None);
    }

    #[test]
    fn test_inputs_round_back_for_edit_mode() {
        assert_eq!(amount_input(500.0), "500");
        assert_eq!(amount_input(99.5), "99.5");
        assert_eq!(optional_count_input(None), "");
        let dt = parse_timestamp("2025-06-14T00:00:00");
        assert_eq!(optional_date_input(dt), "2025-06-14");
    }
}
