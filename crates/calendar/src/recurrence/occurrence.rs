use serde::{Deserialize, Serialize};
use upkeep_core::{CalendarDate, MaintenanceCategory, ScheduleId};

use crate::classify::Tint;

use super::FrequencyLabel;

/// Id suffix of the one occurrence a single-occurrence schedule can have.
pub const SINGLE_ID_SUFFIX: &str = "single";

/// One generated calendar instance of a schedule. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// `{scheduleId}-{epoch millis of the day}` or `{scheduleId}-single`.
    pub id: String,
    pub schedule_id: ScheduleId,
    pub equipment_name: String,
    pub provider_name: String,
    pub maintenance_type_name: String,
    pub contract_description: Option<String>,
    pub date: CalendarDate,
    pub is_overdue: bool,
    /// Same value for every occurrence of a schedule within one run.
    pub contract_expired: bool,
    pub frequency_label: FrequencyLabel,
    pub is_single: bool,
    pub category: MaintenanceCategory,
    pub tint: Tint,
    pub alert_lead_days: i64,
}

impl Occurrence {
    /// Deterministic id for a (schedule, date) pair.
    pub fn make_id(schedule_id: &str, date: CalendarDate, is_single: bool) -> String {
        if is_single {
            format!("{}-{}", schedule_id, SINGLE_ID_SUFFIX)
        } else {
            format!("{}-{}", schedule_id, date.timestamp_millis())
        }
    }
}
