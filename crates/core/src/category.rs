use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed maintenance categories used for colouring, statistics and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceCategory {
    Preventive,
    Corrective,
    Calibration,
    Other,
}

impl MaintenanceCategory {
    /// All categories in classification priority order.
    pub const ALL: [MaintenanceCategory; 4] = [
        MaintenanceCategory::Preventive,
        MaintenanceCategory::Corrective,
        MaintenanceCategory::Calibration,
        MaintenanceCategory::Other,
    ];
}

impl fmt::Display for MaintenanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceCategory::Preventive => write!(f, "PREVENTIVE"),
            MaintenanceCategory::Corrective => write!(f, "CORRECTIVE"),
            MaintenanceCategory::Calibration => write!(f, "CALIBRATION"),
            MaintenanceCategory::Other => write!(f, "OTHER"),
        }
    }
}

impl FromStr for MaintenanceCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PREVENTIVE" => Ok(MaintenanceCategory::Preventive),
            "CORRECTIVE" => Ok(MaintenanceCategory::Corrective),
            "CALIBRATION" => Ok(MaintenanceCategory::Calibration),
            "OTHER" => Ok(MaintenanceCategory::Other),
            other => Err(format!("unknown maintenance category: '{}'", other)),
        }
    }
}
