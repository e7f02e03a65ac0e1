use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

/// Formats tried, in order, for timestamps that carry no offset.
/// Such timestamps are read as wall-clock time in the caller's offset.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn utc() -> FixedOffset {
    return Utc.fix();
}

pub fn offset_from_minutes(minutes: i32) -> Option<FixedOffset> {
    return FixedOffset::east_opt(minutes.checked_mul(60)?);
}

/// Parses a backend timestamp and expresses it in `offset`
pub fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&offset));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return offset.from_local_datetime(&naive).single();
        }
    }

    let midnight = parse_day(raw)?.and_hms_opt(0, 0, 0)?;

    return offset.from_local_datetime(&midnight).single();
}

/// Calendar day a timestamp falls on, seen from `offset`
pub fn local_day(raw: &str, offset: FixedOffset) -> Option<NaiveDate> {
    return parse_timestamp(raw, offset).map(|dt| dt.date_naive());
}

/// Reads a `YYYY-MM-DD` day as typed in a date picker
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    return NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT).ok();
}

/// `dd/mm/yyyy`, or the raw string when it cannot be parsed
pub fn format_day(raw: &str, offset: FixedOffset) -> String {
    return match parse_timestamp(raw, offset) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => raw.to_string(),
    };
}

/// `dd/mm/yyyy HH:MM:SS`, or the raw string when it cannot be parsed
pub fn format_date_time(raw: &str, offset: FixedOffset) -> String {
    return match parse_timestamp(raw, offset) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M:%S").to_string(),
        None => raw.to_string(),
    };
}
