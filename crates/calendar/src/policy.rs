//! CalendarPolicy document — visible window, default horizon and the
//! fallback recurrence interval.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use upkeep_core::config::CalendarConfig;
use upkeep_core::CalendarDate;

use crate::error::{CalendarError, Result};

/// Expected `kind` of a policy document.
pub const POLICY_KIND: &str = "CalendarPolicy";

// ── YAML-level types ────────────────────────────────────────────────

/// Top-level CalendarPolicy document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CalendarPolicyDocument {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: PolicyMetadata,
    #[serde(default)]
    pub spec: CalendarPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PolicyMetadata {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Generation policy. Every field has a default, so an empty `spec` is valid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CalendarPolicy {
    /// Months before today where the visible window starts.
    #[serde(default = "default_lookback_months")]
    pub lookback_months: u32,
    /// Months after today used as the upper bound when no contract applies.
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
    /// Interval substituted for recurring schedules with no frequency.
    #[serde(default = "default_frequency_days")]
    pub default_frequency_days: u32,
}

fn default_lookback_months() -> u32 {
    3
}

fn default_horizon_months() -> u32 {
    6
}

fn default_frequency_days() -> u32 {
    30
}

impl Default for CalendarPolicy {
    fn default() -> Self {
        Self {
            lookback_months: default_lookback_months(),
            horizon_months: default_horizon_months(),
            default_frequency_days: default_frequency_days(),
        }
    }
}

impl From<&CalendarConfig> for CalendarPolicy {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            lookback_months: config.lookback_months,
            horizon_months: config.horizon_months,
            default_frequency_days: config.default_frequency_days,
        }
    }
}

impl CalendarPolicy {
    pub fn validate(&self) -> Result<()> {
        if self.horizon_months == 0 {
            return Err(CalendarError::Validation(
                "horizon_months must be at least 1".to_string(),
            ));
        }
        if self.default_frequency_days == 0 {
            return Err(CalendarError::Validation(
                "default_frequency_days must be at least 1 (0 would mean single occurrence)"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Capture the generation window for one run.
    pub fn window(&self, today: CalendarDate) -> GenerationWindow {
        GenerationWindow {
            today,
            lower_bound: today.add_months(-(self.lookback_months as i32)),
            default_upper_bound: today.add_months(self.horizon_months as i32),
        }
    }

    /// Load and validate a policy document from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        let policy = Self::from_yaml(&yaml)?;
        info!(path = %path.display(), ?policy, "loaded calendar policy");
        Ok(policy)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let doc: CalendarPolicyDocument = serde_yaml::from_str(yaml)?;
        if doc.kind != POLICY_KIND {
            return Err(CalendarError::Validation(format!(
                "expected kind '{}', found '{}'",
                POLICY_KIND, doc.kind
            )));
        }
        doc.spec.validate()?;
        Ok(doc.spec)
    }
}

// ── Per-run window ──────────────────────────────────────────────────

/// Bounds shared by every schedule in one generation run.
///
/// `today` is captured once so that all overdue and window comparisons in a
/// run agree, even if the run straddles midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationWindow {
    pub today: CalendarDate,
    /// Earliest visible date (inclusive).
    pub lower_bound: CalendarDate,
    /// Upper bound for schedules without a usable contract end date.
    pub default_upper_bound: CalendarDate,
}
