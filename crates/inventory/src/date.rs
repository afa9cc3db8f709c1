//! Calendar-date parsing shared by stored blobs and request parameters.
//!
//! Older blobs carry full ISO timestamps (`2024-05-02T00:00:00.000Z`) where newer
//! ones carry plain dates. Both collapse to a `NaiveDate`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse `YYYY-MM-DD`, an RFC 3339 timestamp, or a zone-less ISO timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Serde adapter: writes `YYYY-MM-DD`, reads anything `parse_date` accepts.
pub mod flexible {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
    }
}
