// ABOUTME: Consecutive-day compliance streak for the first-month food restrictions
// ABOUTME: Reverse-chronological scan stopping at the first missing or non-compliant day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Compliance Streak
//!
//! A day counts only when a record exists and all three confirmations are
//! set. The scan runs from today backwards and stops at the first day that
//! fails, so one slip ends the streak even if earlier days were clean.

use std::collections::HashMap;
use std::iter;

use carbcycle_core::models::{ComplianceRecord, StreakStatus};
use chrono::NaiveDate;
use tracing::debug;

use super::cycle_calendar::{day_number_in_cycle, is_first_month};

/// Count compliant days from the most recent entry backwards
///
/// `records` must be ordered most recent first, one entry per calendar day;
/// `None` marks a day with no record.
#[must_use]
pub fn compliance_streak<'a, I>(records: I) -> u32
where
    I: IntoIterator<Item = Option<&'a ComplianceRecord>>,
{
    let streak = records
        .into_iter()
        .take_while(|record| record.is_some_and(ComplianceRecord::is_compliant))
        .count();
    u32::try_from(streak).unwrap_or(u32::MAX)
}

/// Streak for a cycle, walking calendar dates from `today` back to `cycle_start`
///
/// Records may arrive in any order; dates with no record break the streak.
/// When a date has several records, any non-compliant one decides the day.
/// Returns zero when `today` is before `cycle_start`.
#[must_use]
pub fn compliance_streak_for_cycle(
    records: &[ComplianceRecord],
    cycle_start: NaiveDate,
    today: NaiveDate,
) -> u32 {
    let mut by_date: HashMap<NaiveDate, &ComplianceRecord> = HashMap::with_capacity(records.len());
    for record in records {
        by_date
            .entry(record.date)
            .and_modify(|kept| {
                debug!(date = %record.date, "Duplicate compliance record for date");
                if !record.is_compliant() {
                    *kept = record;
                }
            })
            .or_insert(record);
    }

    let days = iter::successors(Some(today), NaiveDate::pred_opt)
        .take_while(|date| *date >= cycle_start)
        .map(|date| by_date.get(&date).copied());

    compliance_streak(days)
}

/// Streak state for today, hidden once the restriction window has passed
#[must_use]
pub fn streak_status(
    records: &[ComplianceRecord],
    cycle_start: NaiveDate,
    today: NaiveDate,
    window_days: i64,
) -> StreakStatus {
    let day_number = day_number_in_cycle(cycle_start, today);
    if day_number < 1 || !is_first_month(day_number, window_days) {
        debug!(
            cycle.day = day_number,
            window_days, "Compliance streak outside restriction window"
        );
        return StreakStatus::Inactive;
    }

    StreakStatus::Active {
        streak: compliance_streak_for_cycle(records, cycle_start, today),
        day_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn record(d: u32, compliant: bool) -> ComplianceRecord {
        ComplianceRecord {
            date: date(d),
            no_fruit: true,
            no_sugar: compliant,
            no_white_flour: true,
        }
    }

    #[test]
    fn test_streak_stops_at_first_failure() {
        let records = [
            record(7, true),
            record(6, true),
            record(5, true),
            record(4, false),
            record(3, true),
            record(2, true),
        ];
        assert_eq!(compliance_streak(records.iter().map(Some)), 3);
        assert_eq!(compliance_streak_for_cycle(&records, date(1), date(7)), 3);
    }

    #[test]
    fn test_missing_day_breaks_streak() {
        let records = [record(10, true), record(8, true), record(7, true)];
        assert_eq!(compliance_streak_for_cycle(&records, date(1), date(10)), 1);
        assert_eq!(compliance_streak_for_cycle(&records, date(1), date(9)), 0);
    }

    #[test]
    fn test_duplicate_date_with_a_failure_is_non_compliant() {
        let clean_then_slip = [record(3, true), record(2, true), record(3, false)];
        let slip_then_clean = [record(3, false), record(2, true), record(3, true)];

        assert_eq!(compliance_streak_for_cycle(&clean_then_slip, date(1), date(3)), 0);
        assert_eq!(compliance_streak_for_cycle(&slip_then_clean, date(1), date(3)), 0);

        let both_clean = [record(3, true), record(3, true), record(2, true)];
        assert_eq!(compliance_streak_for_cycle(&both_clean, date(1), date(3)), 2);
    }

    #[test]
    fn test_scan_stops_at_cycle_start() {
        let records: Vec<ComplianceRecord> = (1..=5).map(|d| record(d, true)).collect();
        assert_eq!(compliance_streak_for_cycle(&records, date(3), date(5)), 3);
        assert_eq!(compliance_streak_for_cycle(&records, date(6), date(5)), 0);
    }

    #[test]
    fn test_status_inactive_after_window() {
        let start = date(1);
        let records = [record(30, true)];

        assert_eq!(
            streak_status(&records, start, date(30), 30),
            StreakStatus::Active {
                streak: 1,
                day_number: 30
            }
        );
        assert_eq!(streak_status(&records, start, date(31), 30), StreakStatus::Inactive);
    }
}
