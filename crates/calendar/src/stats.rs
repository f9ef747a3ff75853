//! Dashboard counters derived from a generated occurrence set.
//!
//! Nothing here is stored between runs: statistics are recomputed from the
//! occurrences of the current run plus the active-schedule count.

use serde::{Deserialize, Serialize};
use upkeep_core::{CalendarDate, MaintenanceCategory};

use crate::recurrence::Occurrence;

/// Width of the "due soon" counter, in days after today (inclusive).
pub const DUE_SOON_DAYS: i64 = 7;

/// Occurrence counts per maintenance category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CategoryCounts {
    pub preventive: usize,
    pub corrective: usize,
    pub calibration: usize,
    pub other: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: MaintenanceCategory) -> usize {
        match category {
            MaintenanceCategory::Preventive => self.preventive,
            MaintenanceCategory::Corrective => self.corrective,
            MaintenanceCategory::Calibration => self.calibration,
            MaintenanceCategory::Other => self.other,
        }
    }

    fn increment(&mut self, category: MaintenanceCategory) {
        match category {
            MaintenanceCategory::Preventive => self.preventive += 1,
            MaintenanceCategory::Corrective => self.corrective += 1,
            MaintenanceCategory::Calibration => self.calibration += 1,
            MaintenanceCategory::Other => self.other += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.preventive + self.corrective + self.calibration + self.other
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatistics {
    /// Schedules flagged active, whether or not they produced occurrences.
    pub total_active_schedules: usize,
    /// `today <= date <= today + 7`.
    pub due_within_7_days: usize,
    /// `date < today`.
    pub overdue_count: usize,
    /// Date within today's calendar month.
    pub due_this_calendar_month: usize,
    pub by_category: CategoryCounts,
}

/// Scan the full (unfiltered) occurrence set of one run.
pub fn aggregate(
    occurrences: &[Occurrence],
    active_schedules: usize,
    today: CalendarDate,
) -> DashboardStatistics {
    let due_soon_end = today.add_days(DUE_SOON_DAYS);
    let month_start = today.first_of_month();
    let month_end = today.last_of_month();

    let mut stats = DashboardStatistics {
        total_active_schedules: active_schedules,
        ..DashboardStatistics::default()
    };

    for o in occurrences {
        if today <= o.date && o.date <= due_soon_end {
            stats.due_within_7_days += 1;
        }
        if o.date < today {
            stats.overdue_count += 1;
        }
        if month_start <= o.date && o.date <= month_end {
            stats.due_this_calendar_month += 1;
        }
        stats.by_category.increment(o.category);
    }

    stats
}
