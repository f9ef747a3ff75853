//! Human-facing frequency buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bucket a recurrence interval falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrequencyLabel {
    Unique,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    Quarterly,
    Semiannual,
    Annual,
}

/// Inclusive upper bound of each recurring bucket, ascending. Anything above
/// the last entry is annual.
const BUCKETS: &[(u32, FrequencyLabel)] = &[
    (1, FrequencyLabel::Daily),
    (7, FrequencyLabel::Weekly),
    (15, FrequencyLabel::Biweekly),
    (30, FrequencyLabel::Monthly),
    (60, FrequencyLabel::Bimonthly),
    (90, FrequencyLabel::Quarterly),
    (180, FrequencyLabel::Semiannual),
];

impl FrequencyLabel {
    pub fn for_days(days: u32) -> Self {
        if days == 0 {
            return FrequencyLabel::Unique;
        }
        BUCKETS
            .iter()
            .find(|(max, _)| days <= *max)
            .map(|(_, label)| *label)
            .unwrap_or(FrequencyLabel::Annual)
    }
}

impl fmt::Display for FrequencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrequencyLabel::Unique => write!(f, "UNIQUE"),
            FrequencyLabel::Daily => write!(f, "DAILY"),
            FrequencyLabel::Weekly => write!(f, "WEEKLY"),
            FrequencyLabel::Biweekly => write!(f, "BIWEEKLY"),
            FrequencyLabel::Monthly => write!(f, "MONTHLY"),
            FrequencyLabel::Bimonthly => write!(f, "BIMONTHLY"),
            FrequencyLabel::Quarterly => write!(f, "QUARTERLY"),
            FrequencyLabel::Semiannual => write!(f, "SEMIANNUAL"),
            FrequencyLabel::Annual => write!(f, "ANNUAL"),
        }
    }
}
