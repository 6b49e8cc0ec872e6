// ABOUTME: Calendar commands for carbcycle-cli
// ABOUTME: Cycle position lookups and the first-month compliance streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

use std::path::Path;

use carbcycle::config::ProtocolConfig;
use carbcycle::errors::AppResult;
use carbcycle::intelligence::{cycle_day_position, is_first_month, streak_status, CycleDayPosition};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::helpers::display::{print_json, read_compliance_records};

#[derive(Serialize)]
struct DayReport {
    date: NaiveDate,
    #[serde(flatten)]
    position: CycleDayPosition,
    first_month: bool,
}

/// Print where `date` falls in the cycle that began on `start`
pub fn day(start: NaiveDate, date: NaiveDate, config: &ProtocolConfig) -> AppResult<()> {
    let position = cycle_day_position(start, date)?;
    info!(
        cycle.day = position.day_number,
        carb_day = %position.carb_day_type,
        "Resolved cycle position"
    );

    print_json(&DayReport {
        date,
        position,
        first_month: is_first_month(position.day_number, config.restriction_window_days),
    })
}

/// Print the compliance streak as of `today`
pub fn streak(
    start: NaiveDate,
    today: NaiveDate,
    records_path: &Path,
    config: &ProtocolConfig,
) -> AppResult<()> {
    let records = read_compliance_records(records_path)?;
    let status = streak_status(&records, start, today, config.restriction_window_days);
    print_json(&status)
}
