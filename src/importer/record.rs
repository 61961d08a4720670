// ==========================================
// Warehouse FEFO Core - Raw Batch Records
// ==========================================
// Responsibility: the unvalidated shape batches arrive in from the
// data-fetching layer, plus date normalization.
// Lifecycle: import pipeline only; engines see `Batch` values.
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// RawBatchRecord - upstream record before admission
// ==========================================
// Upstream systems are inconsistent: expiry arrives as a bare date or
// as a full timestamp, and any field may be missing. Validation is
// centralized in `Batch::from_record` / `ExpiryMonitor::validate_batch`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBatchRecord {
    pub id: Option<String>,
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub intake_date: Option<NaiveDate>,
}

impl RawBatchRecord {
    pub fn new(id: &str, expiry_date: &str, quantity: f64) -> Self {
        Self {
            id: Some(id.to_string()),
            expiry_date: Some(expiry_date.to_string()),
            quantity,
            intake_date: None,
        }
    }
}

/// Normalize an upstream expiry value to a calendar date.
///
/// Accepted forms, tried in order:
/// 1) bare ISO date `YYYY-MM-DD`
/// 2) RFC 3339 timestamp (`2026-08-26T10:30:00Z`, offset variants)
/// 3) naive timestamp `YYYY-MM-DDTHH:MM:SS`
///
/// Time-of-day is dropped; comparisons downstream are date-only.
pub fn parse_expiry_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = trimmed.parse::<NaiveDate>() {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = trimmed.parse::<NaiveDateTime>() {
        return Some(ts.date());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_bare_date() {
        assert_eq!(
            parse_expiry_date("2026-09-15"),
            NaiveDate::from_ymd_opt(2026, 9, 15)
        );
    }

    #[test]
    fn test_parse_rfc3339_timestamp() {
        assert_eq!(
            parse_expiry_date("2026-09-15T10:30:00Z"),
            NaiveDate::from_ymd_opt(2026, 9, 15)
        );
        assert_eq!(
            parse_expiry_date("2026-09-15T23:00:00-05:00"),
            NaiveDate::from_ymd_opt(2026, 9, 15)
        );
    }

    #[test]
    fn test_parse_naive_timestamp() {
        assert_eq!(
            parse_expiry_date("2026-09-15T10:30:00"),
            NaiveDate::from_ymd_opt(2026, 9, 15)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_expiry_date(""), None);
        assert_eq!(parse_expiry_date("mañana"), None);
        assert_eq!(parse_expiry_date("15/09/2026"), None);
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let record: RawBatchRecord = serde_json::from_str(r#"{"quantity": 5.0}"#).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.expiry_date, None);
        assert_eq!(record.quantity, 5.0);
    }
}
