//! Normalization of raw schedule and contract records.
//!
//! Dates cross a network boundary with inconsistent encodings. Everything is
//! reduced to [`CalendarDate`](upkeep_core::CalendarDate) here, once, so the
//! rest of the engine never parses or converts timezones again.

mod date;
mod schedule;


pub use self::date::{normalize_date, parse_date, parse_date_str, DateError};
pub use self::schedule::{
    index_contracts, normalize_schedule, ContractWindow, Frequency, MaintenanceSchedule,
    SkipReason,
};
