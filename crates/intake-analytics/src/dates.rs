//! Best-effort calendar bucketing for free-text `dateTime` fields.

use chrono::NaiveDate;

/// Bucket key used for every record whose timestamp cannot be parsed.
///
/// All unparseable timestamps merge into this single bucket; it sorts after
/// the `YYYY-MM-DD` keys because `U` follows the digits lexicographically.
pub const UNKNOWN_DATE: &str = "Unknown";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m-%d-%Y", "%Y/%m/%d"];

/// Reduce a free-text timestamp to an ISO `YYYY-MM-DD` bucket key.
///
/// If the value contains whitespace only the leading token is considered
/// (the source data writes `"2024-01-15 10:30 AM"` style timestamps).
/// Anything unparseable, including `None`, buckets as [`UNKNOWN_DATE`].
pub fn date_key(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN_DATE.to_string();
    };
    let Some(date_part) = raw.trim().split_whitespace().next() else {
        return UNKNOWN_DATE.to_string();
    };

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date_part) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    UNKNOWN_DATE.to_string()
}
