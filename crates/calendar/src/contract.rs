//! Contract-bounded upper limit of a schedule's generation window.

use serde::Serialize;
use upkeep_core::CalendarDate;

use crate::normalize::ContractWindow;
use crate::policy::GenerationWindow;

/// Resolved upper bound for one schedule in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractBoundary {
    /// Last date (inclusive) occurrences may be generated on.
    pub upper_bound: CalendarDate,
    /// The linked contract ended before today.
    pub contract_expired: bool,
}

/// A schedule never projects past the end of the contract that covers it.
///
/// Without a contract, or with one whose end date did not normalize, the
/// window's default horizon applies and the contract is not expired.
pub fn resolve_boundary(
    contract: Option<&ContractWindow>,
    window: &GenerationWindow,
) -> ContractBoundary {
    match contract.and_then(|c| c.end_date) {
        Some(end) => ContractBoundary {
            upper_bound: end,
            contract_expired: end < window.today,
        },
        None => ContractBoundary {
            upper_bound: window.default_upper_bound,
            contract_expired: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::CalendarPolicy;

    fn d(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn contract(end: Option<&str>) -> ContractWindow {
        ContractWindow {
            id: "c-1".into(),
            description: "Service contract".into(),
            provider_name: "Acme".into(),
            start_date: None,
            end_date: end.map(d),
        }
    }

    #[test]
    fn no_contract_uses_default_horizon() {
        let window = CalendarPolicy::default().window(d("2025-03-15"));
        let b = resolve_boundary(None, &window);
        assert_eq!(b.upper_bound, d("2025-09-15"));
        assert!(!b.contract_expired);
    }

    #[test]
    fn unusable_end_date_uses_default_horizon() {
        let window = CalendarPolicy::default().window(d("2025-03-15"));
        let b = resolve_boundary(Some(&contract(None)), &window);
        assert_eq!(b.upper_bound, d("2025-09-15"));
        assert!(!b.contract_expired);
    }

    #[test]
    fn future_end_date_caps_window() {
        let window = CalendarPolicy::default().window(d("2025-03-01"));
        let b = resolve_boundary(Some(&contract(Some("2025-04-01"))), &window);
        assert_eq!(b.upper_bound, d("2025-04-01"));
        assert!(!b.contract_expired);
    }

    #[test]
    fn past_end_date_is_expired() {
        let window = CalendarPolicy::default().window(d("2025-03-01"));
        let b = resolve_boundary(Some(&contract(Some("2025-02-01"))), &window);
        assert_eq!(b.upper_bound, d("2025-02-01"));
        assert!(b.contract_expired);
    }

    #[test]
    fn end_date_today_is_not_expired() {
        let window = CalendarPolicy::default().window(d("2025-03-01"));
        let b = resolve_boundary(Some(&contract(Some("2025-03-01"))), &window);
        assert!(!b.contract_expired);
    }

    #[test]
    fn contract_longer_than_horizon_extends_window() {
        let window = CalendarPolicy::default().window(d("2025-03-01"));
        let b = resolve_boundary(Some(&contract(Some("2026-12-31"))), &window);
        assert_eq!(b.upper_bound, d("2026-12-31"));
    }
}
