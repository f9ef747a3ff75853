//! Record → typed schedule normalization.
//!
//! Resolves every date once, links the contract by id, and decides whether a
//! schedule is eligible for generation at all. Ineligible schedules come back
//! as a [`SkipReason`], never as an error.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};
use upkeep_core::{CalendarDate, ContractId, ContractRecord, RawDate, ScheduleId, ScheduleRecord};

use super::date::{normalize_date, parse_date};

/// A contract with its dates resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractWindow {
    pub id: ContractId,
    pub description: String,
    pub provider_name: String,
    pub start_date: Option<CalendarDate>,
    /// `None` when absent or unparseable; the default horizon applies then.
    pub end_date: Option<CalendarDate>,
}

impl ContractWindow {
    pub fn from_record(record: &ContractRecord) -> Self {
        let end_date = normalize_date(record.end_date.as_ref());
        if record.end_date.is_some() && end_date.is_none() {
            warn!(
                contract_id = %record.id,
                "contract end date is malformed, default horizon will apply"
            );
        }
        Self {
            id: record.id.clone(),
            description: record.description.clone(),
            provider_name: record.provider_name.clone(),
            start_date: normalize_date(record.start_date.as_ref()),
            end_date,
        }
    }
}

/// Recurrence rule of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// `frequencyDays == 0`: at most one occurrence.
    Single,
    /// Repeats every N days (N > 0).
    EveryDays(u32),
}

/// A schedule that is active and has everything generation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceSchedule {
    pub id: ScheduleId,
    pub equipment_name: String,
    pub provider_name: String,
    pub maintenance_type_name: String,
    pub frequency: Frequency,
    pub last_maintenance_date: Option<CalendarDate>,
    pub next_maintenance_date: CalendarDate,
    pub creation_date: Option<CalendarDate>,
    pub alert_lead_days: i64,
    pub contract: Option<ContractWindow>,
}

/// Why a schedule produced no occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    Inactive,
    MissingNextDate,
    MalformedDate { field: &'static str, value: String },
    InvalidFrequency { days: i64 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Inactive => write!(f, "schedule is inactive"),
            SkipReason::MissingNextDate => write!(f, "no next maintenance date"),
            SkipReason::MalformedDate { field, value } => {
                write!(f, "malformed {}: {}", field, value)
            }
            SkipReason::InvalidFrequency { days } => {
                write!(f, "invalid frequency: {} days", days)
            }
        }
    }
}

/// Resolve all contracts once, keyed by id.
pub fn index_contracts(records: &[ContractRecord]) -> HashMap<ContractId, ContractWindow> {
    records
        .iter()
        .map(|r| (r.id.clone(), ContractWindow::from_record(r)))
        .collect()
}

/// Normalize one schedule record.
///
/// - Inactive schedules are skipped before any field is inspected.
/// - A present but malformed date (next, last or creation) skips the whole
///   schedule, so no partial occurrence set is ever built from half-parsed
///   data.
/// - A missing frequency becomes `default_frequency_days`; a negative one
///   skips the schedule.
pub fn normalize_schedule(
    record: &ScheduleRecord,
    contracts: &HashMap<ContractId, ContractWindow>,
    default_frequency_days: u32,
) -> Result<MaintenanceSchedule, SkipReason> {
    if !record.active {
        return Err(SkipReason::Inactive);
    }

    let next_maintenance_date = match record.next_maintenance_date.as_ref() {
        None => return Err(SkipReason::MissingNextDate),
        Some(raw) => required_date(raw, "next_maintenance_date")?,
    };
    let last_maintenance_date = record
        .last_maintenance_date
        .as_ref()
        .map(|raw| required_date(raw, "last_maintenance_date"))
        .transpose()?;
    let creation_date = record
        .creation_date
        .as_ref()
        .map(|raw| required_date(raw, "creation_date"))
        .transpose()?;

    let frequency = match record.frequency_days {
        None => Frequency::EveryDays(default_frequency_days),
        Some(0) => Frequency::Single,
        Some(days) => match u32::try_from(days) {
            Ok(days) => Frequency::EveryDays(days),
            Err(_) => return Err(SkipReason::InvalidFrequency { days }),
        },
    };

    let contract = match record.contract_id.as_ref() {
        None => None,
        Some(id) => {
            let found = contracts.get(id).cloned();
            if found.is_none() {
                debug!(
                    schedule_id = %record.id,
                    contract_id = %id,
                    "linked contract not in snapshot"
                );
            }
            found
        }
    };

    Ok(MaintenanceSchedule {
        id: record.id.clone(),
        equipment_name: record.equipment_name.clone(),
        provider_name: record.provider_name.clone(),
        maintenance_type_name: record.maintenance_type_name.clone(),
        frequency,
        last_maintenance_date,
        next_maintenance_date,
        creation_date,
        alert_lead_days: record.alert_lead_days,
        contract,
    })
}

fn required_date(raw: &RawDate, field: &'static str) -> Result<CalendarDate, SkipReason> {
    parse_date(raw).map_err(|e| SkipReason::MalformedDate {
        field,
        value: e.to_string(),
    })
}
