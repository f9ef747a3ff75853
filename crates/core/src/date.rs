use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A timezone-agnostic calendar day.
///
/// Every comparison in the calendar engine happens on this type so that no
/// value ever passes through a UTC/local conversion after it has been
/// normalized. Serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year/month/day, returning `None` for impossible days.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Shift by a signed number of days. Saturates at the chrono range limits.
    pub fn add_days(&self, days: i64) -> Self {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days as u64))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        Self(shifted.unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN }))
    }

    /// Shift by whole months, clamping the day to the end of the target month
    /// (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(&self, months: i32) -> Self {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months as u32))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        Self(shifted.unwrap_or(if months >= 0 { NaiveDate::MAX } else { NaiveDate::MIN }))
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(&self, earlier: CalendarDate) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    pub fn first_of_month(&self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    pub fn last_of_month(&self) -> Self {
        self.first_of_month().add_months(1).add_days(-1)
    }

    /// Milliseconds since the Unix epoch at 00:00 UTC of this day.
    ///
    /// Stable for a given date regardless of the host timezone, which makes it
    /// usable inside identifiers.
    pub fn timestamp_millis(&self) -> i64 {
        self.0
            .and_hms_opt(0, 0, 0)
            .map(|midnight| midnight.and_utc().timestamp_millis())
            .unwrap_or_default()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = chrono::ParseError;

    /// Strict `YYYY-MM-DD` parsing. Lenient, multi-encoding parsing lives in
    /// the calendar crate's normalizer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn add_days_crosses_month_and_year() {
        assert_eq!(d("2025-01-01").add_days(30), d("2025-01-31"));
        assert_eq!(d("2025-01-31").add_days(30), d("2025-03-02"));
        assert_eq!(d("2024-12-31").add_days(1), d("2025-01-01"));
        assert_eq!(d("2025-03-01").add_days(-1), d("2025-02-28"));
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(d("2025-01-31").add_months(1), d("2025-02-28"));
        assert_eq!(d("2024-01-31").add_months(1), d("2024-02-29"));
        assert_eq!(d("2025-03-15").add_months(6), d("2025-09-15"));
        assert_eq!(d("2025-03-15").add_months(-3), d("2024-12-15"));
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(d("2025-02-14").first_of_month(), d("2025-02-01"));
        assert_eq!(d("2025-02-14").last_of_month(), d("2025-02-28"));
        assert_eq!(d("2024-02-14").last_of_month(), d("2024-02-29"));
        assert_eq!(d("2025-12-05").last_of_month(), d("2025-12-31"));
    }

    #[test]
    fn days_since_is_signed() {
        assert_eq!(d("2025-03-02").days_since(d("2025-01-31")), 30);
        assert_eq!(d("2025-01-31").days_since(d("2025-03-02")), -30);
    }

    #[test]
    fn timestamp_is_utc_midnight() {
        assert_eq!(d("1970-01-02").timestamp_millis(), 86_400_000);
    }

    #[test]
    fn serde_uses_iso_day() {
        let json = serde_json::to_string(&d("2025-07-08")).unwrap();
        assert_eq!(json, "\"2025-07-08\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d("2025-07-08"));
    }

    #[test]
    fn strict_parse_rejects_timestamps() {
        assert!("2025-07-08T00:00:00Z".parse::<CalendarDate>().is_err());
        assert!("2025-02-30".parse::<CalendarDate>().is_err());
    }
}
