//! Tests for the recurrence module.

use upkeep_core::{CalendarDate, MaintenanceCategory};

use super::*;
use crate::classify::Tint;
use crate::normalize::{ContractWindow, Frequency, MaintenanceSchedule};
use crate::policy::{CalendarPolicy, GenerationWindow};

fn d(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

fn window(today: &str) -> GenerationWindow {
    CalendarPolicy::default().window(d(today))
}

fn schedule(frequency: Frequency, next: &str) -> MaintenanceSchedule {
    MaintenanceSchedule {
        id: "s-1".to_string(),
        equipment_name: "Chiller 2".to_string(),
        provider_name: "CoolCo".to_string(),
        maintenance_type_name: "Preventiva".to_string(),
        frequency,
        last_maintenance_date: None,
        next_maintenance_date: d(next),
        creation_date: None,
        alert_lead_days: 5,
        contract: None,
    }
}

fn with_contract(mut s: MaintenanceSchedule, end: &str) -> MaintenanceSchedule {
    s.contract = Some(ContractWindow {
        id: "c-1".to_string(),
        description: "Chiller full service".to_string(),
        provider_name: "CoolCo".to_string(),
        start_date: None,
        end_date: Some(d(end)),
    });
    s
}

fn dates(occurrences: &[Occurrence]) -> Vec<CalendarDate> {
    occurrences.iter().map(|o| o.date).collect()
}

// -- FrequencyLabel --------------------------------------------------------

#[test]
fn frequency_buckets_are_inclusive_upper_bounds() {
    let cases = [
        (0, FrequencyLabel::Unique),
        (1, FrequencyLabel::Daily),
        (2, FrequencyLabel::Weekly),
        (7, FrequencyLabel::Weekly),
        (8, FrequencyLabel::Biweekly),
        (15, FrequencyLabel::Biweekly),
        (30, FrequencyLabel::Monthly),
        (31, FrequencyLabel::Bimonthly),
        (60, FrequencyLabel::Bimonthly),
        (90, FrequencyLabel::Quarterly),
        (180, FrequencyLabel::Semiannual),
        (181, FrequencyLabel::Annual),
        (365, FrequencyLabel::Annual),
    ];
    for (days, expected) in cases {
        assert_eq!(FrequencyLabel::for_days(days), expected, "days = {}", days);
    }
    assert_eq!(FrequencyLabel::Semiannual.to_string(), "SEMIANNUAL");
}

// -- recurrence_dates ------------------------------------------------------

#[test]
fn steps_forward_to_lower_bound() {
    let got = recurrence_dates(d("2025-01-01"), 10, d("2025-01-15"), d("2025-02-10"));
    assert_eq!(got, vec![d("2025-01-21"), d("2025-01-31"), d("2025-02-10")]);
}

#[test]
fn anchor_on_lower_bound_is_kept() {
    let got = recurrence_dates(d("2025-01-15"), 7, d("2025-01-15"), d("2025-01-29"));
    assert_eq!(got, vec![d("2025-01-15"), d("2025-01-22"), d("2025-01-29")]);
}

#[test]
fn anchor_after_upper_bound_yields_nothing() {
    let got = recurrence_dates(d("2025-06-01"), 30, d("2025-01-01"), d("2025-05-31"));
    assert!(got.is_empty());
}

#[test]
fn upper_before_lower_yields_nothing() {
    // Contract ended before the visible window even starts.
    let got = recurrence_dates(d("2024-01-01"), 30, d("2025-01-01"), d("2024-06-28"));
    assert!(got.is_empty());
}

#[test]
fn zero_step_yields_nothing() {
    assert!(recurrence_dates(d("2025-01-01"), 0, d("2025-01-01"), d("2025-12-31")).is_empty());
}

#[test]
fn old_anchor_does_not_drift() {
    let anchor = d("2015-03-07");
    let got = recurrence_dates(anchor, 13, d("2025-01-01"), d("2025-03-01"));
    assert!(!got.is_empty());
    for date in &got {
        assert_eq!(date.days_since(anchor) % 13, 0);
    }
    assert!(got[0].days_since(d("2025-01-01")) < 13);
}

// -- occurrences_for: single -----------------------------------------------

#[test]
fn single_inside_window() {
    let s = schedule(Frequency::Single, "2025-05-01");
    let got = occurrences_for(&s, &window("2025-03-15"));
    assert_eq!(got.len(), 1);
    let o = &got[0];
    assert_eq!(o.date, d("2025-05-01"));
    assert!(o.is_single);
    assert_eq!(o.frequency_label, FrequencyLabel::Unique);
    assert_eq!(o.id, "s-1-single");
    assert!(!o.is_overdue);
}

#[test]
fn single_outside_window() {
    let w = window("2025-03-15");
    assert!(occurrences_for(&schedule(Frequency::Single, "2024-12-14"), &w).is_empty());
    assert!(occurrences_for(&schedule(Frequency::Single, "2025-09-16"), &w).is_empty());
    assert_eq!(occurrences_for(&schedule(Frequency::Single, "2024-12-15"), &w).len(), 1);
    assert_eq!(occurrences_for(&schedule(Frequency::Single, "2025-09-15"), &w).len(), 1);
}

#[test]
fn single_ignores_last_maintenance_date() {
    let mut s = schedule(Frequency::Single, "2025-05-01");
    s.last_maintenance_date = Some(d("2025-04-01"));
    assert_eq!(dates(&occurrences_for(&s, &window("2025-03-15"))), vec![d("2025-05-01")]);
}

// -- occurrences_for: recurring --------------------------------------------

#[test]
fn anchor_is_last_plus_frequency() {
    let mut s = schedule(Frequency::EveryDays(30), "2025-06-01");
    s.last_maintenance_date = Some(d("2025-01-01"));
    let got = occurrences_for(&s, &window("2025-03-15"));
    assert_eq!(got[0].date, d("2025-01-31"));
    assert_eq!(got[1].date, d("2025-03-02"));
    assert_eq!(got[2].date, d("2025-04-01"));
    assert_eq!(got.last().map(|o| o.date), Some(d("2025-08-29")));
    assert!(got[0].is_overdue);
    assert!(got[1].is_overdue);
    assert!(!got[2].is_overdue);
}

#[test]
fn anchor_falls_back_to_next_date() {
    let s = schedule(Frequency::EveryDays(15), "2025-03-20");
    let got = occurrences_for(&s, &window("2025-03-15"));
    assert_eq!(got[0].date, d("2025-03-20"));
    assert_eq!(got[1].date, d("2025-04-04"));
    assert_eq!(got[0].frequency_label, FrequencyLabel::Biweekly);
}

#[test]
fn recurring_ids_are_deterministic_and_unique() {
    let s = schedule(Frequency::EveryDays(7), "2025-03-01");
    let w = window("2025-03-15");
    let first = occurrences_for(&s, &w);
    let second = occurrences_for(&s, &w);
    assert_eq!(first, second);

    let mut ids: Vec<&str> = first.iter().map(|o| o.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), first.len());
    assert_eq!(first[0].id, format!("s-1-{}", d("2025-03-01").timestamp_millis()));
}

#[test]
fn last_after_next_can_yield_nothing() {
    let mut s = schedule(Frequency::EveryDays(30), "2025-01-01");
    s.last_maintenance_date = Some(d("2025-09-01"));
    assert!(occurrences_for(&s, &window("2025-03-15")).is_empty());
}

// -- contract handling -----------------------------------------------------

#[test]
fn contract_caps_generation() {
    let s = with_contract(schedule(Frequency::EveryDays(15), "2025-03-01"), "2025-04-01");
    let got = occurrences_for(&s, &window("2025-03-01"));
    assert_eq!(
        dates(&got),
        vec![d("2025-03-01"), d("2025-03-16"), d("2025-03-31")]
    );
    assert!(got.iter().all(|o| !o.contract_expired));
    assert!(got
        .iter()
        .all(|o| o.contract_description.as_deref() == Some("Chiller full service")));
}

#[test]
fn expired_contract_tints_but_keeps_category() {
    let s = with_contract(schedule(Frequency::EveryDays(15), "2025-01-01"), "2025-02-01");
    let got = occurrences_for(&s, &window("2025-03-01"));
    assert!(!got.is_empty());
    for o in &got {
        assert!(o.contract_expired);
        assert!(o.date <= d("2025-02-01"));
        assert_eq!(o.tint, Tint::ExpiredContract);
        assert_eq!(o.category, MaintenanceCategory::Preventive);
    }
}

#[test]
fn occurrences_carry_schedule_fields() {
    let s = schedule(Frequency::EveryDays(30), "2025-04-01");
    let o = &occurrences_for(&s, &window("2025-03-15"))[0];
    assert_eq!(o.schedule_id, "s-1");
    assert_eq!(o.equipment_name, "Chiller 2");
    assert_eq!(o.provider_name, "CoolCo");
    assert_eq!(o.maintenance_type_name, "Preventiva");
    assert_eq!(o.alert_lead_days, 5);
    assert_eq!(o.tint, Tint::Preventive);
    assert!(o.contract_description.is_none());
}
