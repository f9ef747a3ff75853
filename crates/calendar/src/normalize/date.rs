//! Lenient date parsing for the encodings upstream services send.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::debug;
use upkeep_core::{CalendarDate, RawDate};

/// Why a raw date could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("empty date value")]
    Empty,

    #[error("unparseable date: '{0}'")]
    Unparseable(String),

    #[error("date out of range: {0}")]
    OutOfRange(String),
}

/// Offset-less date-time layouts; only the date part is kept.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-time layouts carrying a numeric offset, with or without a colon.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
];

/// Normalize an optional raw value. `None` means "no date available".
pub fn normalize_date(raw: Option<&RawDate>) -> Option<CalendarDate> {
    let raw = raw?;
    match parse_date(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            debug!(error = %e, "date did not normalize");
            None
        }
    }
}

/// Parse one raw date into a calendar day.
pub fn parse_date(raw: &RawDate) -> Result<CalendarDate, DateError> {
    match raw {
        RawDate::Resolved(date) => Ok(*date),
        RawDate::Text(text) => parse_date_str(text),
        RawDate::Parts(parts) => from_parts(parts),
        RawDate::EpochMillis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms)
            .map(|instant| CalendarDate::from(instant.date_naive()))
            .ok_or_else(|| DateError::OutOfRange(format!("{} ms", ms))),
    }
}

/// Parse a textual date.
///
/// - `YYYY-MM-DD` is that calendar day, no timezone involved.
/// - A date-time without offset keeps only its date part.
/// - A date-time with `Z` or an explicit offset is converted to the absolute
///   instant and the UTC calendar day of that instant is used.
/// - A trailing bracketed zone annotation (`[UTC]`, `[Europe/Lisbon]`) is
///   ignored.
pub fn parse_date_str(input: &str) -> Result<CalendarDate, DateError> {
    let s = strip_zone_annotation(input.trim());
    if s.is_empty() {
        return Err(DateError::Empty);
    }
    let s = utc_designator_as_offset(s);
    let s = s.as_str();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.into());
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(s) {
        return Ok(instant.with_timezone(&Utc).date_naive().into());
    }

    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(instant) = DateTime::parse_from_str(s, fmt) {
            return Ok(instant.with_timezone(&Utc).date_naive().into());
        }
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(local.date().into());
        }
    }

    Err(DateError::Unparseable(input.to_string()))
}

/// Drop a trailing `[...]` zone annotation, e.g. `2025-07-08T00:00:00Z[UTC]`.
fn strip_zone_annotation(s: &str) -> &str {
    if s.ends_with(']') {
        if let Some(open) = s.rfind('[') {
            return s[..open].trim_end();
        }
    }
    s
}

/// Rewrite a trailing `Z` on a date-time as `+00:00`, so layouts without
/// seconds (`2025-07-08T00:00Z`) go through the offset formats.
fn utc_designator_as_offset(s: &str) -> String {
    match s.strip_suffix(|c: char| c == 'Z' || c == 'z') {
        Some(head) if head.contains('T') => format!("{}+00:00", head),
        _ => s.to_string(),
    }
}

/// `[year, month, day, ...]`; trailing time components are ignored.
fn from_parts(parts: &[i64]) -> Result<CalendarDate, DateError> {
    let [year, month, day, ..] = parts else {
        return Err(DateError::Unparseable(format!("{:?}", parts)));
    };
    let out_of_range = || DateError::OutOfRange(format!("{:?}", parts));
    let year = i32::try_from(*year).map_err(|_| out_of_range())?;
    let month = u32::try_from(*month).map_err(|_| out_of_range())?;
    let day = u32::try_from(*day).map_err(|_| out_of_range())?;
    CalendarDate::from_ymd(year, month, day).ok_or_else(out_of_range)
}
