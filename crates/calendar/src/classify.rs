//! Maintenance-type classification and display tint.
//!
//! The type name is free text typed by users ("Preventiva mensal",
//! "Corrective - pump", "Calibração anual"), so classification is a
//! case-insensitive keyword search with a fixed priority order.

use serde::{Deserialize, Serialize};
use upkeep_core::MaintenanceCategory;

const PREVENTIVE_KEYWORDS: &[&str] = &["preventiv"];
const CORRECTIVE_KEYWORDS: &[&str] = &["corretiv", "correctiv"];
/// Matched against the accent-folded name.
const CALIBRATION_KEYWORDS: &[&str] = &["calibracao", "calibration", "calibracion"];

/// Classify a maintenance-type name. Empty or unknown names are `Other`.
///
/// Priority: preventive, corrective, calibration.
pub fn classify(type_name: &str) -> MaintenanceCategory {
    let lower = type_name.to_lowercase();
    if contains_any(&lower, PREVENTIVE_KEYWORDS) {
        return MaintenanceCategory::Preventive;
    }
    if contains_any(&lower, CORRECTIVE_KEYWORDS) {
        return MaintenanceCategory::Corrective;
    }
    if contains_any(&fold_accents(&lower), CALIBRATION_KEYWORDS) {
        return MaintenanceCategory::Calibration;
    }
    MaintenanceCategory::Other
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Replace common Latin diacritics with their base letter (input is lowercase).
fn fold_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}

// ── Tint ────────────────────────────────────────────────────────────

/// Display colour of an occurrence.
///
/// Purely visual: an expired contract greys the occurrence out but never
/// changes its [`MaintenanceCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    Preventive,
    Corrective,
    Calibration,
    Other,
    ExpiredContract,
}

impl Tint {
    pub fn for_occurrence(category: MaintenanceCategory, contract_expired: bool) -> Self {
        if contract_expired {
            return Tint::ExpiredContract;
        }
        match category {
            MaintenanceCategory::Preventive => Tint::Preventive,
            MaintenanceCategory::Corrective => Tint::Corrective,
            MaintenanceCategory::Calibration => Tint::Calibration,
            MaintenanceCategory::Other => Tint::Other,
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Tint::Preventive => "#2e7d32",
            Tint::Corrective => "#c62828",
            Tint::Calibration => "#1565c0",
            Tint::Other => "#6a1b9a",
            Tint::ExpiredContract => "#9e9e9e",
        }
    }
}
