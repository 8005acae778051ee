//! Expiry classification.
//!
//! A record's status is driven by the more urgent of its two expiry dates
//! (license and contract). Classification is a pure function of the record and
//! a reference date; nothing here reads the wall clock.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Upper bound (inclusive) of the `soon` bracket, in days.
pub const SOON_DAYS: i64 = 15;

/// Upper bound (inclusive) of the `warn` bracket, in days.
pub const WARN_DAYS: i64 = 45;

/// Severity tag, in descending urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryLevel {
    Expired,
    Soon,
    Warn,
    Ok,
    /// Neither date is present (or parseable).
    #[serde(rename = "nofecha")]
    NoDate,
}

impl ExpiryLevel {
    pub const ALL: [ExpiryLevel; 5] = [
        ExpiryLevel::Expired,
        ExpiryLevel::Soon,
        ExpiryLevel::Warn,
        ExpiryLevel::Ok,
        ExpiryLevel::NoDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryLevel::Expired => "expired",
            ExpiryLevel::Soon => "soon",
            ExpiryLevel::Warn => "warn",
            ExpiryLevel::Ok => "ok",
            ExpiryLevel::NoDate => "nofecha",
        }
    }
}

impl core::fmt::Display for ExpiryLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived expiry status of a record. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryStatus {
    pub level: ExpiryLevel,
    pub label: String,
    /// Signed days until the worst-case date; `None` iff `level` is `NoDate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_remaining: Option<i64>,
}

/// Parse a stored expiry value into a calendar date.
///
/// Accepts plain dates (`2026-01-31`) and timestamps (RFC 3339, or ISO-like
/// with a `T` or space separator); timestamps keep only their date part.
/// An RFC 3339 timestamp is first moved into local time, so it lands on the
/// same calendar day as a local "today".
pub fn parse_expiry_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Local).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|ts| ts.date())
}

/// Signed whole days from `today` to `date` (negative once `date` has passed).
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Map a worst-case day count onto a level and label.
pub fn classify_days(min_days: Option<i64>) -> ExpiryStatus {
    let Some(days) = min_days else {
        return ExpiryStatus {
            level: ExpiryLevel::NoDate,
            label: "no date".to_string(),
            days_remaining: None,
        };
    };

    let (level, label) = if days < 0 {
        (ExpiryLevel::Expired, format!("expired ({days} days)"))
    } else if days <= SOON_DAYS {
        (ExpiryLevel::Soon, format!("expires in {days} days"))
    } else if days <= WARN_DAYS {
        (ExpiryLevel::Warn, format!("warning ({days} days)"))
    } else {
        (ExpiryLevel::Ok, format!("{days} days left"))
    };

    ExpiryStatus {
        level,
        label,
        days_remaining: Some(days),
    }
}

/// Classify a record against `today`.
///
/// Missing or unparsable dates contribute nothing; the earlier of the
/// remaining dates wins.
pub fn classify(record: &Record, today: NaiveDate) -> ExpiryStatus {
    let min_days = [&record.license_expiry, &record.contract_expiry]
        .into_iter()
        .filter_map(|value| value.as_deref().and_then(parse_expiry_date))
        .map(|date| days_until(date, today))
        .min();

    classify_days(min_days)
}
