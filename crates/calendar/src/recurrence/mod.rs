//! Recurrence generation.
//!
//! Expands one normalized [`MaintenanceSchedule`](crate::normalize::MaintenanceSchedule)
//! into the concrete [`Occurrence`]s that fall inside its window. The window
//! runs from the run's lower bound to the schedule's contract boundary.

mod frequency;
mod generator;
mod occurrence;

#[cfg(test)]
mod tests;

pub use self::frequency::FrequencyLabel;
pub use self::generator::{occurrences_for, recurrence_dates};
pub use self::occurrence::{Occurrence, SINGLE_ID_SUFFIX};
