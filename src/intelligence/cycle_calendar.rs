// ABOUTME: Calendar arithmetic mapping dates onto the repeating 6-day carb cycle
// ABOUTME: Day numbers, cycle numbers, positions and LOW/MEDIUM/HIGH classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Cycle Calendar
//!
//! Maps a `(cycle_start, target_date)` pair onto the fixed 112113 pattern:
//!
//! | position | 1 | 2 | 3 | 4 | 5 | 6 |
//! |----------|---|---|---|---|---|---|
//! | carbs    | LOW | LOW | MEDIUM | LOW | LOW | HIGH |
//!
//! Everything works on calendar dates. Timestamps are reduced to their
//! calendar date before any arithmetic, so two instants on the same day give
//! identical results regardless of wall-clock time. "Today" is always passed
//! in by the caller; nothing here reads a clock.

use carbcycle_core::constants::cycle::{CARB_DAY_PATTERN, CYCLE_LENGTH_DAYS};
use carbcycle_core::models::CarbDayType;
use carbcycle_core::{AppError, AppResult};
use chrono::{DateTime, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Where a date falls relative to a cycle start
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CycleDayPosition {
    /// Days since cycle start, starting at 1
    pub day_number: i64,
    /// Which 6-day cycle the date belongs to, starting at 1
    pub cycle_number: i64,
    /// Position inside the current cycle (1..=6)
    pub position_in_cycle: u8,
    /// Carb classification of the day
    pub carb_day_type: CarbDayType,
}

/// Number of whole days between the two dates, plus one
///
/// Returns zero or a negative number when `target_date` precedes
/// `cycle_start`; use [`cycle_day_position`] for a guarded variant.
#[must_use]
pub fn day_number_in_cycle(cycle_start: NaiveDate, target_date: NaiveDate) -> i64 {
    (target_date - cycle_start).num_days() + 1
}

/// Same as [`day_number_in_cycle`] for timestamps; time of day is discarded
#[must_use]
pub fn day_number_for_timestamps<Tz: TimeZone>(
    cycle_start: &DateTime<Tz>,
    target: &DateTime<Tz>,
) -> i64 {
    day_number_in_cycle(cycle_start.date_naive(), target.date_naive())
}

fn pattern_index(day_number: i64) -> usize {
    // rem_euclid keeps the index in 0..6 even for pre-start day numbers
    (day_number - 1).rem_euclid(CYCLE_LENGTH_DAYS) as usize
}

/// Carb classification for a day number
#[must_use]
pub fn carb_day_type(day_number: i64) -> CarbDayType {
    CARB_DAY_PATTERN[pattern_index(day_number)]
}

/// Position of a day number inside its cycle (1..=6)
#[must_use]
pub fn position_in_cycle(day_number: i64) -> u8 {
    (pattern_index(day_number) + 1) as u8
}

/// Cycle number (starting at 1) of `target_date`
#[must_use]
pub fn cycle_number(cycle_start: NaiveDate, target_date: NaiveDate) -> i64 {
    cycle_number_for_day(day_number_in_cycle(cycle_start, target_date))
}

fn cycle_number_for_day(day_number: i64) -> i64 {
    (day_number - 1).div_euclid(CYCLE_LENGTH_DAYS) + 1
}

/// First calendar date of cycle `cycle_number` in a plan starting at `plan_start`
///
/// # Errors
///
/// Returns an `InvalidInput` error when `cycle_number` is below 1, and a
/// `ValueOutOfRange` error when the date falls outside the supported calendar
pub fn cycle_start_date_for_cycle(plan_start: NaiveDate, cycle_number: i64) -> AppResult<NaiveDate> {
    if cycle_number < 1 {
        return Err(AppError::invalid_input("Cycle numbers start at 1")
            .with_details(serde_json::json!({ "cycle_number": cycle_number })));
    }

    (cycle_number - 1)
        .checked_mul(CYCLE_LENGTH_DAYS)
        .and_then(|offset| days_after(plan_start, offset))
        .ok_or_else(|| {
            AppError::out_of_range("Cycle start date is outside the supported calendar range")
                .with_details(serde_json::json!({
                    "plan_start": plan_start,
                    "cycle_number": cycle_number,
                }))
        })
}

/// Calendar date of day `day_number` (starting at 1) of a cycle
///
/// Returns `None` for day numbers below 1 or dates past the calendar's end.
#[must_use]
pub fn date_for_day_number(cycle_start: NaiveDate, day_number: i64) -> Option<NaiveDate> {
    days_after(cycle_start, day_number.checked_sub(1)?)
}

fn days_after(start: NaiveDate, offset_days: i64) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(u64::try_from(offset_days).ok()?))
}

/// Whether the first-month restriction window still applies on `day_number`
#[must_use]
pub const fn is_first_month(day_number: i64, window_days: i64) -> bool {
    day_number <= window_days
}

/// Full position of `target_date` in the cycle that began on `cycle_start`
///
/// # Errors
///
/// Returns an `InvalidInput` error when `target_date` is before `cycle_start`
pub fn cycle_day_position(
    cycle_start: NaiveDate,
    target_date: NaiveDate,
) -> AppResult<CycleDayPosition> {
    let day_number = day_number_in_cycle(cycle_start, target_date);
    if day_number < 1 {
        return Err(
            AppError::invalid_input("Target date is before the cycle start date")
                .with_details(serde_json::json!({
                    "cycle_start": cycle_start,
                    "target_date": target_date,
                })),
        );
    }

    Ok(CycleDayPosition {
        day_number,
        cycle_number: cycle_number_for_day(day_number),
        position_in_cycle: position_in_cycle(day_number),
        carb_day_type: carb_day_type(day_number),
    })
}
