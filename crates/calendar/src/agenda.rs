//! Views over a generated occurrence set: alert list, per-day and per-month
//! grouping for calendar grids.

use std::collections::BTreeMap;

use upkeep_core::CalendarDate;

use crate::recurrence::Occurrence;

/// Occurrences an external notifier should announce today.
///
/// An occurrence is alerting from `alert_lead_days` before its date up to and
/// including the date itself. Overdue occurrences are excluded; they are
/// already reported by the overdue counter. Negative lead days count as zero.
pub fn alerts(occurrences: &[Occurrence], today: CalendarDate) -> Vec<&Occurrence> {
    occurrences
        .iter()
        .filter(|o| {
            let lead = o.alert_lead_days.max(0);
            today <= o.date && o.date <= today.add_days(lead)
        })
        .collect()
}

/// Group occurrences by calendar day, days in ascending order.
pub fn by_day(occurrences: &[Occurrence]) -> BTreeMap<CalendarDate, Vec<&Occurrence>> {
    let mut days: BTreeMap<CalendarDate, Vec<&Occurrence>> = BTreeMap::new();
    for o in occurrences {
        days.entry(o.date).or_default().push(o);
    }
    days
}

/// Occurrences falling in the given calendar month.
pub fn in_month(occurrences: &[Occurrence], year: i32, month: u32) -> Vec<&Occurrence> {
    occurrences
        .iter()
        .filter(|o| o.date.year() == year && o.date.month() == month)
        .collect()
}
