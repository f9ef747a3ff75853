use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// Opaque schedule identifier, as issued by the schedule-management service.
pub type ScheduleId = String;

/// Opaque contract identifier.
pub type ContractId = String;

/// A date field exactly as it arrives from the data source.
///
/// Upstream services are inconsistent: most send strings (`2025-07-08`,
/// `2025-07-08T10:00:00`, `2025-07-08T00:00:00Z[UTC]`), some send
/// `[year, month, day, ...]` arrays, a few send epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Text(String),
    Parts(Vec<i64>),
    EpochMillis(i64),
    /// Already normalized by the caller; never produced by deserialization.
    #[serde(skip_deserializing)]
    Resolved(CalendarDate),
}

impl From<&str> for RawDate {
    fn from(s: &str) -> Self {
        RawDate::Text(s.to_string())
    }
}

impl From<CalendarDate> for RawDate {
    fn from(date: CalendarDate) -> Self {
        RawDate::Resolved(date)
    }
}

/// A maintenance schedule as read from the data source, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    pub id: ScheduleId,
    #[serde(default)]
    pub equipment_name: String,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub maintenance_type_name: String,
    /// `0` = single occurrence. Missing means "use the policy default".
    #[serde(default)]
    pub frequency_days: Option<i64>,
    #[serde(default)]
    pub last_maintenance_date: Option<RawDate>,
    #[serde(default)]
    pub next_maintenance_date: Option<RawDate>,
    #[serde(default)]
    pub creation_date: Option<RawDate>,
    #[serde(default)]
    pub alert_lead_days: i64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub contract_id: Option<ContractId>,
}

fn default_active() -> bool {
    true
}

/// A maintenance contract as read from the data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub id: ContractId,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub start_date: Option<RawDate>,
    #[serde(default)]
    pub end_date: Option<RawDate>,
}
