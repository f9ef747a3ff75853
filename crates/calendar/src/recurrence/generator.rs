//! Occurrence generation for a single schedule.

use tracing::debug;
use upkeep_core::{CalendarDate, MaintenanceCategory};

use crate::classify::{classify, Tint};
use crate::contract::{resolve_boundary, ContractBoundary};
use crate::normalize::{Frequency, MaintenanceSchedule};
use crate::policy::GenerationWindow;

use super::{FrequencyLabel, Occurrence};

/// Expand one schedule into its occurrences inside the run window.
///
/// The window is `[window.lower_bound, boundary.upper_bound]`, where the upper
/// bound comes from the schedule's contract (or the default horizon).
/// Returned occurrences are in ascending date order.
pub fn occurrences_for(
    schedule: &MaintenanceSchedule,
    window: &GenerationWindow,
) -> Vec<Occurrence> {
    let boundary = resolve_boundary(schedule.contract.as_ref(), window);

    let (dates, frequency_days) = match schedule.frequency {
        Frequency::Single => {
            let date = schedule.next_maintenance_date;
            let in_window = window.lower_bound <= date && date <= boundary.upper_bound;
            (if in_window { vec![date] } else { Vec::new() }, 0)
        }
        Frequency::EveryDays(days) => {
            let anchor = match schedule.last_maintenance_date {
                Some(last) => last.add_days(i64::from(days)),
                None => schedule.next_maintenance_date,
            };
            (
                recurrence_dates(anchor, days, window.lower_bound, boundary.upper_bound),
                days,
            )
        }
    };

    debug!(
        schedule_id = %schedule.id,
        occurrences = dates.len(),
        upper_bound = %boundary.upper_bound,
        contract_expired = boundary.contract_expired,
        "generated schedule occurrences"
    );

    let template = OccurrenceTemplate {
        schedule,
        boundary,
        category: classify(&schedule.maintenance_type_name),
        frequency_label: FrequencyLabel::for_days(frequency_days),
        today: window.today,
    };
    dates.into_iter().map(|date| template.at(date)).collect()
}

/// Dates `anchor + k * step` (k ≥ 0) that lie within `[lower, upper]`.
///
/// The cursor is first advanced in whole steps until it reaches the lower
/// bound, but never past the upper bound. An anchor after `upper` yields
/// nothing. `step` must be non-zero.
pub fn recurrence_dates(
    anchor: CalendarDate,
    step: u32,
    lower: CalendarDate,
    upper: CalendarDate,
) -> Vec<CalendarDate> {
    if step == 0 {
        return Vec::new();
    }
    let step = i64::from(step);

    let floor = lower.min(upper);
    let mut cursor = anchor;
    let behind = floor.days_since(cursor);
    if behind > 0 {
        // Ceil division: smallest number of steps that reaches `floor`.
        let steps = (behind + step - 1) / step;
        cursor = cursor.add_days(steps * step);
    }

    // `cursor < lower` only when upper < lower: the visible window is empty.
    if cursor > upper || cursor < lower {
        return Vec::new();
    }

    let count = upper.days_since(cursor) / step + 1;
    (0..count).map(|k| cursor.add_days(k * step)).collect()
}

/// Per-schedule values shared by every occurrence of one run.
struct OccurrenceTemplate<'a> {
    schedule: &'a MaintenanceSchedule,
    boundary: ContractBoundary,
    category: MaintenanceCategory,
    frequency_label: FrequencyLabel,
    today: CalendarDate,
}

impl OccurrenceTemplate<'_> {
    fn at(&self, date: CalendarDate) -> Occurrence {
        let schedule = self.schedule;
        let is_single = matches!(schedule.frequency, Frequency::Single);
        Occurrence {
            id: Occurrence::make_id(&schedule.id, date, is_single),
            schedule_id: schedule.id.clone(),
            equipment_name: schedule.equipment_name.clone(),
            provider_name: schedule.provider_name.clone(),
            maintenance_type_name: schedule.maintenance_type_name.clone(),
            contract_description: schedule.contract.as_ref().map(|c| c.description.clone()),
            date,
            is_overdue: date < self.today,
            contract_expired: self.boundary.contract_expired,
            frequency_label: self.frequency_label,
            is_single,
            category: self.category,
            tint: Tint::for_occurrence(self.category, self.boundary.contract_expired),
            alert_lead_days: schedule.alert_lead_days,
        }
    }
}
