//! Time utilities: ISO-8601 (de)serialization of punch timestamps, elapsed hours.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Parse an ISO-8601 datetime.
/// Accepts RFC 3339 with offset, or a naive datetime interpreted as local time.
pub fn parse_iso_local(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    raw.parse::<NaiveDateTime>().ok().and_then(naive_to_local)
}

/// Resolve a wall-clock time to local time. A time skipped by a DST jump
/// is moved forward by one hour.
fn naive_to_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    match naive.and_local_timezone(Local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => (naive + Duration::hours(1))
            .and_local_timezone(Local)
            .earliest(),
    }
}

/// Elapsed time between two instants, in fractional hours.
/// Negative when `end` precedes `start`.
pub fn hours_between(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Human-readable local timestamp used in CLI output.
pub fn display_timestamp(dt: &DateTime<Local>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Serde adapter for `DateTime<Local>` fields.
pub mod iso_local {
    use super::parse_iso_local;
    use chrono::{DateTime, Local};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(dt: &DateTime<Local>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Local>, D::Error> {
        let raw = String::deserialize(d)?;
        parse_iso_local(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 datetime: '{raw}'")))
    }
}

/// Serde adapter for `Option<DateTime<Local>>` fields (`null` when absent).
pub mod iso_local_opt {
    use super::parse_iso_local;
    use chrono::{DateTime, Local};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        dt: &Option<DateTime<Local>>,
        s: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => s.serialize_some(&dt.to_rfc3339()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Local>>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(raw) => parse_iso_local(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 datetime: '{raw}'"))),
            None => Ok(None),
        }
    }
}
