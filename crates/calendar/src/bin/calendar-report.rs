//! calendar-report — generate the maintenance calendar for a snapshot file.
//!
//! Reads schedules and contracts from a JSON/YAML snapshot, runs one
//! generation pass and prints `{today, window, filter, statistics,
//! occurrences, skipped}` as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use upkeep_calendar::agenda;
use upkeep_calendar::pipeline::SkippedSchedule;
use upkeep_calendar::snapshot::Snapshot;
use upkeep_calendar::{
    generate, project, CalendarPolicy, CategoryFilter, DashboardStatistics, GenerationWindow,
    Occurrence,
};
use upkeep_core::config::{load_dotenv, Config};
use upkeep_core::CalendarDate;

// ── CLI ─────────────────────────────────────────────────────────────

/// Maintenance calendar report — occurrences and dashboard statistics.
#[derive(Parser, Debug)]
#[command(name = "calendar-report", version, about)]
struct Cli {
    /// Config profile; keys are looked up as {PROFILE}_{KEY} first
    /// (default: UPKEEP_PROFILE).
    #[arg(long)]
    profile: Option<String>,

    /// Snapshot file (overrides SNAPSHOT_PATH).
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// CalendarPolicy YAML (overrides CALENDAR_POLICY_PATH and env defaults).
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Reference day, YYYY-MM-DD (overrides CALENDAR_TODAY; default: local date).
    #[arg(long)]
    today: Option<CalendarDate>,

    /// Category shown: ALL, PREVENTIVE, CORRECTIVE, CALIBRATION or OTHER.
    #[arg(long, default_value = "ALL")]
    filter: CategoryFilter,

    /// Only print occurrences that should be announced today.
    #[arg(long)]
    alerts_only: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

// ── Output ──────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    today: CalendarDate,
    window: &'a GenerationWindow,
    filter: String,
    /// Computed over the unfiltered run.
    statistics: &'a DashboardStatistics,
    occurrences: Vec<ReportEntry>,
    skipped: &'a [SkippedSchedule],
}

/// One occurrence plus the display colour of its tint.
#[derive(Serialize)]
struct ReportEntry {
    #[serde(flatten)]
    occurrence: Occurrence,
    colour: &'static str,
}

impl From<Occurrence> for ReportEntry {
    fn from(occurrence: Occurrence) -> Self {
        let colour = occurrence.tint.hex();
        Self { occurrence, colour }
    }
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    load_dotenv();
    let cli = Cli::parse();
    let config = match cli.profile.as_deref() {
        Some(profile) => Config::for_profile(profile),
        None => Config::from_env(),
    };
    config.log_summary();
    debug!(config = %config.summary_json(), "effective configuration");

    let policy = match cli.policy.as_ref().or(config.snapshot.policy_path.as_ref()) {
        Some(path) => CalendarPolicy::load(path)
            .with_context(|| format!("loading policy {}", path.display()))?,
        None => {
            let policy = CalendarPolicy::from(&config.calendar);
            policy.validate()?;
            policy
        }
    };

    // "today" is captured exactly once per run.
    let today = match cli.today {
        Some(day) => day,
        None => config
            .calendar
            .today_override()?
            .unwrap_or_else(|| chrono::Local::now().date_naive().into()),
    };

    let snapshot_path = cli.snapshot.unwrap_or(config.snapshot.path);
    let snapshot = Snapshot::load(&snapshot_path)
        .with_context(|| format!("loading snapshot {}", snapshot_path.display()))?;

    let run = generate(&snapshot.schedules, &snapshot.contracts, today, &policy);

    let visible = project(&run.occurrences, cli.filter);
    let occurrences = if cli.alerts_only {
        agenda::alerts(&visible, today).into_iter().cloned().collect()
    } else {
        visible
    };
    info!(filter = %cli.filter, shown = occurrences.len(), "report ready");

    let report = Report {
        today,
        window: &run.window,
        filter: cli.filter.to_string(),
        statistics: &run.statistics,
        occurrences: occurrences.into_iter().map(ReportEntry::from).collect(),
        skipped: &run.skipped,
    };
    let out = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", out);
    Ok(())
}
