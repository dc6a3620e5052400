//! Day/frequency constraint shared by pricing, validation and the
//! configuration reducer.
//!
//! A monthly schedule, and any pest-control schedule, recurs on a single day.
//! Interactive toggling replaces the existing day instead of failing, and a
//! frequency change truncates the schedule to its first day.

use shared::{DayOfWeek, Frequency, ServiceCategory};

/// Whether the schedule may hold at most one day
pub fn restricts_to_single_day(frequency: Option<Frequency>, category: ServiceCategory) -> bool {
    frequency == Some(Frequency::Monthly) || category == ServiceCategory::PestControl
}

/// Toggle a day in the schedule.
///
/// Removing a scheduled day always succeeds. Adding a day while the
/// single-day rule applies replaces whatever day is already scheduled.
pub fn toggle_day(
    days: &[DayOfWeek],
    day: DayOfWeek,
    frequency: Option<Frequency>,
    category: ServiceCategory,
) -> Vec<DayOfWeek> {
    if days.contains(&day) {
        return days.iter().copied().filter(|d| *d != day).collect();
    }

    if restricts_to_single_day(frequency, category) {
        return vec![day];
    }

    let mut next = days.to_vec();
    next.push(day);
    next
}

/// Drop all but the first scheduled day when the single-day rule applies
pub fn truncate_for_frequency(
    days: &[DayOfWeek],
    frequency: Option<Frequency>,
    category: ServiceCategory,
) -> Vec<DayOfWeek> {
    if restricts_to_single_day(frequency, category) {
        days.iter().take(1).copied().collect()
    } else {
        days.to_vec()
    }
}

/// Remove repeated days, keeping the first occurrence of each
pub fn dedupe_days(days: &[DayOfWeek]) -> Vec<DayOfWeek> {
    let mut unique = Vec::with_capacity(days.len());
    for day in days {
        if !unique.contains(day) {
            unique.push(*day);
        }
    }
    unique
}
