//! Maintenance calendar engine.
//!
//! Turns sparse maintenance-schedule records (frequency + anchor dates +
//! optional contract) into a concrete, time-bounded list of occurrences and
//! derives dashboard statistics from it.
//!
//! This crate provides:
//! - Lenient date normalization for the encodings upstream services send
//! - Contract-bounded generation windows
//! - Recurrence generation with overdue / expired-contract / frequency tagging
//! - Keyword-based maintenance-type classification
//! - Dashboard statistics and category filtering
//! - Snapshot and YAML policy loading for the `calendar-report` binary
//!
//! Every entry point is a pure function of its inputs; "today" is always
//! passed in explicitly.

pub mod agenda;
pub mod classify;
pub mod contract;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod pipeline;
pub mod policy;
pub mod recurrence;
pub mod snapshot;
pub mod stats;

pub use error::{CalendarError, Result};
pub use filter::{project, CategoryFilter};
pub use pipeline::{generate, CalendarRun};
pub use policy::{CalendarPolicy, GenerationWindow};
pub use recurrence::{FrequencyLabel, Occurrence};
pub use stats::DashboardStatistics;
