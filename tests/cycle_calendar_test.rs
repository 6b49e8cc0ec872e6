// ABOUTME: Integration tests for the cycle calendar
// ABOUTME: Pattern periodicity, day/cycle numbering, timestamp handling and pre-start guards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use carbcycle::errors::ErrorCode;
use carbcycle::intelligence::{
    carb_day_type, cycle_day_position, cycle_number, cycle_start_date_for_cycle,
    day_number_for_timestamps, day_number_in_cycle, is_first_month, position_in_cycle,
};
use carbcycle::models::CarbDayType;
use chrono::{Duration, FixedOffset, TimeZone, Utc};
use common::date;

#[test]
fn test_pattern_is_112113() {
    common::init_test_logging();
    let pattern: Vec<CarbDayType> = (1..=6).map(carb_day_type).collect();
    assert_eq!(
        pattern,
        vec![
            CarbDayType::Low,
            CarbDayType::Low,
            CarbDayType::Medium,
            CarbDayType::Low,
            CarbDayType::Low,
            CarbDayType::High,
        ]
    );
}

#[test]
fn test_pattern_repeats_every_six_days() {
    for day in 1..=600 {
        assert_eq!(carb_day_type(day), carb_day_type(day + 6), "day {day}");
    }
    for cycle in 0..50 {
        assert_eq!(carb_day_type(cycle * 6 + 3), CarbDayType::Medium);
        assert_eq!(carb_day_type(cycle * 6 + 6), CarbDayType::High);
    }
}

#[test]
fn test_positions_stay_in_range() {
    for day in 1..=120 {
        let position = position_in_cycle(day);
        assert!((1..=6).contains(&position));
        assert_eq!(i64::from(position), (day - 1) % 6 + 1);
    }
}

#[test]
fn test_second_cycle_example() {
    let start = date(2024, 1, 1);
    let target = date(2024, 1, 7);

    let position = cycle_day_position(start, target).unwrap();
    assert_eq!(position.day_number, 7);
    assert_eq!(position.position_in_cycle, 1);
    assert_eq!(position.cycle_number, 2);
    assert_eq!(position.carb_day_type, CarbDayType::Low);
}

#[test]
fn test_start_date_is_day_one() {
    let start = date(2024, 2, 28);
    let position = cycle_day_position(start, start).unwrap();
    assert_eq!(position.day_number, 1);
    assert_eq!(position.cycle_number, 1);
    assert_eq!(position.carb_day_type, CarbDayType::Low);
}

#[test]
fn test_leap_day_is_counted() {
    let start = date(2024, 2, 25);
    assert_eq!(day_number_in_cycle(start, date(2024, 3, 1)), 6);
    assert_eq!(carb_day_type(day_number_in_cycle(start, date(2024, 3, 1))), CarbDayType::High);
}

#[test]
fn test_cycle_numbers_and_start_dates_agree() {
    let plan_start = date(2024, 1, 1);
    for cycle in 1..=10 {
        let cycle_start = cycle_start_date_for_cycle(plan_start, cycle).unwrap();
        assert_eq!(cycle_number(plan_start, cycle_start), cycle);
        assert_eq!(cycle_number(plan_start, cycle_start + Duration::days(5)), cycle);
        assert_eq!(position_in_cycle(day_number_in_cycle(plan_start, cycle_start)), 1);
    }
}

#[test]
fn test_time_of_day_is_ignored() {
    let start_morning = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
    let start_night = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap();
    let target_early = Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 1).unwrap();
    let target_late = Utc.with_ymd_and_hms(2024, 1, 7, 23, 0, 0).unwrap();

    assert_eq!(day_number_for_timestamps(&start_morning, &target_early), 7);
    assert_eq!(day_number_for_timestamps(&start_night, &target_early), 7);
    assert_eq!(day_number_for_timestamps(&start_morning, &target_late), 7);
}

#[test]
fn test_timestamps_use_their_local_calendar_date() {
    let offset = FixedOffset::east_opt(9 * 3600).unwrap();
    let start = offset.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap();
    let target = offset.with_ymd_and_hms(2024, 1, 3, 23, 30, 0).unwrap();
    assert_eq!(day_number_for_timestamps(&start, &target), 3);
}

#[test]
fn test_pre_start_queries_are_rejected() {
    let err = cycle_day_position(date(2024, 3, 10), date(2024, 3, 1)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("before the cycle start"));
}

#[test]
fn test_first_month_window() {
    assert!(is_first_month(1, 30));
    assert!(is_first_month(30, 30));
    assert!(!is_first_month(31, 30));
    assert!(is_first_month(31, 45));
}

#[test]
fn test_far_future_cycle_start_is_rejected() {
    let plan_start = date(2024, 1, 1);

    let err = cycle_start_date_for_cycle(plan_start, 100_000_000).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.context.details["cycle_number"], 100_000_000);

    let last_ok = cycle_start_date_for_cycle(plan_start, 1_000).unwrap();
    assert_eq!(cycle_number(plan_start, last_ok), 1_000);
}
