//! One generation run: records in, occurrences and statistics out.

use serde::Serialize;
use tracing::{debug, info, warn};
use upkeep_core::{CalendarDate, ContractRecord, ScheduleId, ScheduleRecord};

use crate::normalize::{index_contracts, normalize_schedule, SkipReason};
use crate::policy::{CalendarPolicy, GenerationWindow};
use crate::recurrence::{occurrences_for, Occurrence};
use crate::stats::{aggregate, DashboardStatistics};

/// A schedule that produced nothing, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedSchedule {
    pub schedule_id: ScheduleId,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Output of one run. Built fresh on every call and never mutated after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRun {
    pub window: GenerationWindow,
    /// Sorted by (date, schedule id).
    pub occurrences: Vec<Occurrence>,
    pub statistics: DashboardStatistics,
    pub skipped: Vec<SkippedSchedule>,
}

/// Generate the calendar for a snapshot.
///
/// Pure: the same records, `today` and policy always give the same run.
/// Never fails; schedules that cannot be generated are listed in
/// [`CalendarRun::skipped`] and logged.
pub fn generate(
    schedules: &[ScheduleRecord],
    contracts: &[ContractRecord],
    today: CalendarDate,
    policy: &CalendarPolicy,
) -> CalendarRun {
    let window = policy.window(today);
    let contracts = index_contracts(contracts);

    let mut occurrences = Vec::new();
    let mut skipped = Vec::new();
    let mut generated = 0usize;

    for record in schedules {
        match normalize_schedule(record, &contracts, policy.default_frequency_days) {
            Ok(schedule) => {
                generated += 1;
                occurrences.extend(occurrences_for(&schedule, &window));
            }
            Err(reason) => {
                match reason {
                    SkipReason::Inactive | SkipReason::MissingNextDate => {
                        debug!(schedule_id = %record.id, %reason, "schedule skipped");
                    }
                    SkipReason::MalformedDate { .. } | SkipReason::InvalidFrequency { .. } => {
                        warn!(schedule_id = %record.id, %reason, "schedule skipped");
                    }
                }
                skipped.push(SkippedSchedule {
                    schedule_id: record.id.clone(),
                    reason,
                });
            }
        }
    }

    occurrences.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.schedule_id.cmp(&b.schedule_id))
    });

    let active_schedules = schedules.iter().filter(|s| s.active).count();
    let statistics = aggregate(&occurrences, active_schedules, today);

    info!(
        today = %today,
        schedules = schedules.len(),
        active = active_schedules,
        generated,
        skipped = skipped.len(),
        occurrences = occurrences.len(),
        "calendar generated"
    );

    CalendarRun {
        window,
        occurrences,
        statistics,
        skipped,
    }
}
