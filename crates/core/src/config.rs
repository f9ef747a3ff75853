use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::UpkeepError;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_u32(profile: &str, key: &str, default: u32) -> u32 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub calendar: CalendarConfig,
    pub snapshot: SnapshotConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `UPKEEP_PROFILE` env var. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("UPKEEP_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            calendar: CalendarConfig::from_env_profiled(p),
            snapshot: SnapshotConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  calendar:    lookback={}m, horizon={}m, default_frequency={}d",
            self.calendar.lookback_months,
            self.calendar.horizon_months,
            self.calendar.default_frequency_days,
        );
        tracing::info!(
            "  today:       {}",
            self.calendar.today.as_deref().unwrap_or("(system clock)")
        );
        tracing::info!(
            "  snapshot:    path={}, policy={}",
            self.snapshot.path.display(),
            self.snapshot
                .policy_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string()),
        );
    }

    /// Return a JSON view of the effective configuration.
    pub fn summary_json(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "calendar": {
                "lookback_months": self.calendar.lookback_months,
                "horizon_months": self.calendar.horizon_months,
                "default_frequency_days": self.calendar.default_frequency_days,
                "today": self.calendar.today,
            },
            "snapshot": {
                "path": self.snapshot.path,
                "policy_path": self.snapshot.policy_path,
            },
        })
    }
}

// ── Calendar generation ───────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// How far back the visible window starts, in months before today.
    pub lookback_months: u32,
    /// Default generation horizon for schedules without a usable contract.
    pub horizon_months: u32,
    /// Interval substituted when a recurring schedule has no frequency.
    pub default_frequency_days: u32,
    /// Fixed "today" (`YYYY-MM-DD`) for reproducible runs.
    pub today: Option<String>,
}

impl CalendarConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            lookback_months: profiled_env_u32(p, "CALENDAR_LOOKBACK_MONTHS", 3),
            horizon_months: profiled_env_u32(p, "CALENDAR_HORIZON_MONTHS", 6),
            default_frequency_days: profiled_env_u32(p, "CALENDAR_DEFAULT_FREQUENCY_DAYS", 30),
            today: profiled_env_opt(p, "CALENDAR_TODAY"),
        }
    }

    /// Parse the fixed "today", if one is configured.
    pub fn today_override(&self) -> Result<Option<CalendarDate>, UpkeepError> {
        self.today
            .as_deref()
            .map(|raw| {
                raw.trim().parse().map_err(|_| UpkeepError::InvalidDate {
                    field: "CALENDAR_TODAY",
                    value: raw.to_string(),
                })
            })
            .transpose()
    }
}

// ── Snapshot input ────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// JSON or YAML file holding schedules and contracts.
    pub path: PathBuf,
    /// Optional YAML calendar policy overriding the env defaults.
    pub policy_path: Option<PathBuf>,
}

impl SnapshotConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            path: PathBuf::from(
                profiled_env_opt(p, "SNAPSHOT_PATH")
                    .unwrap_or_else(|| "data/snapshots/sample.json".to_string()),
            ),
            policy_path: profiled_env_opt(p, "CALENDAR_POLICY_PATH").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global; every test uses its own profile prefix so
    // parallel tests never observe each other's values.

    #[test]
    fn defaults_when_env_is_empty() {
        let config = Config::for_profile("UPKEEPTESTEMPTY");
        assert_eq!(config.calendar.lookback_months, 3);
        assert_eq!(config.calendar.horizon_months, 6);
        assert_eq!(config.calendar.default_frequency_days, 30);
        assert_eq!(config.profile_label(), "UPKEEPTESTEMPTY");
    }

    #[test]
    fn profiled_key_wins() {
        env::set_var("UPKEEPTESTPROFILED_CALENDAR_HORIZON_MONTHS", "12");
        let config = Config::for_profile("upkeeptestprofiled");
        assert_eq!(config.calendar.horizon_months, 12);
        assert_eq!(config.calendar.lookback_months, 3);
        env::remove_var("UPKEEPTESTPROFILED_CALENDAR_HORIZON_MONTHS");
    }

    #[test]
    fn unparseable_numbers_fall_back_to_default() {
        env::set_var("UPKEEPTESTBAD_CALENDAR_HORIZON_MONTHS", "soon");
        env::set_var("UPKEEPTESTBAD_CALENDAR_DEFAULT_FREQUENCY_DAYS", "-30");
        let config = Config::for_profile("UPKEEPTESTBAD");
        env::remove_var("UPKEEPTESTBAD_CALENDAR_HORIZON_MONTHS");
        env::remove_var("UPKEEPTESTBAD_CALENDAR_DEFAULT_FREQUENCY_DAYS");
        assert_eq!(config.calendar.horizon_months, 6);
        assert_eq!(config.calendar.default_frequency_days, 30);
    }

    #[test]
    fn summary_json_shape() {
        let config = Config::for_profile("UPKEEPTESTSUMMARY");
        let json = config.summary_json();
        assert_eq!(json["profile"], "UPKEEPTESTSUMMARY");
        assert_eq!(json["calendar"]["horizon_months"], 6);
        assert!(json["snapshot"]["path"].is_string());
    }

    #[test]
    fn today_override_parses_iso_day() {
        let mut config = Config::for_profile("UPKEEPTESTTODAY").calendar;
        assert!(config.today_override().unwrap().is_none());

        config.today = Some("2025-03-15".to_string());
        assert_eq!(
            config.today_override().unwrap(),
            CalendarDate::from_ymd(2025, 3, 15)
        );

        config.today = Some("15/03/2025".to_string());
        let err = config.today_override().unwrap_err();
        assert!(err.to_string().contains("CALENDAR_TODAY"));
    }
}
