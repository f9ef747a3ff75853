//! Input snapshot: the schedule and contract records of one generation run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use upkeep_core::{ContractRecord, ScheduleRecord};

use crate::error::{CalendarError, Result};

/// Immutable input of one run, as delivered by the data-retrieval side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub schedules: Vec<ScheduleRecord>,
    #[serde(default)]
    pub contracts: Vec<ContractRecord>,
}

impl Snapshot {
    /// Load a snapshot file; the format is picked from the extension
    /// (`.json`, `.yml`, `.yaml`).
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        let snapshot = match ext.as_str() {
            "json" => Self::from_json(&content)?,
            "yml" | "yaml" => Self::from_yaml(&content)?,
            other => {
                return Err(CalendarError::Validation(format!(
                    "unsupported snapshot format '{}' ({})",
                    other,
                    path.display()
                )))
            }
        };

        info!(
            path = %path.display(),
            schedules = snapshot.schedules.len(),
            contracts = snapshot.contracts.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
