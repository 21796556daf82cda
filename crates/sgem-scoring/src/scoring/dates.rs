use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Accepts plain `YYYY-MM-DD` dates as well as RFC 3339 timestamps, which is
/// what collection forms emit for measurement dates.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc().date())
}

pub(crate) fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "failed to parse '{raw}' as YYYY-MM-DD or RFC 3339 timestamp"
        ))
    })
}
