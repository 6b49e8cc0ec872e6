// ABOUTME: Exercise command for carbcycle-cli
// ABOUTME: Training guidance for a carb day and completion status of a logged session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

use carbcycle::errors::{AppError, AppResult, ErrorCode};
use carbcycle::intelligence::{completion_status, generate_exercise_plan};
use carbcycle::models::{
    CarbDayType, CardioSession, ExerciseCompletionStatus, ExercisePlan, ExerciseRecord,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::helpers::display::print_json;

#[derive(Serialize)]
struct ExerciseReport {
    plan: ExercisePlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<ExerciseRecord>,
    status: ExerciseCompletionStatus,
}

/// Print the exercise plan and, when a session is logged, its completion
pub fn exercise(
    day_type: CarbDayType,
    strength_done: bool,
    cardio_minutes: &[u32],
    date: Option<NaiveDate>,
) -> AppResult<()> {
    let logged = strength_done || !cardio_minutes.is_empty();
    let record = match (logged, date) {
        (false, _) => None,
        (true, Some(date)) => Some(ExerciseRecord {
            date,
            strength_completed: strength_done,
            cardio_sessions: cardio_minutes
                .iter()
                .map(|&minutes| CardioSession {
                    completed: true,
                    minutes,
                })
                .collect(),
        }),
        (true, None) => {
            return Err(AppError::new(
                ErrorCode::MissingRequiredField,
                "--date is required when logging a session",
            ))
        }
    };

    let plan = generate_exercise_plan(day_type);
    let status = completion_status(record.as_ref(), &plan);

    print_json(&ExerciseReport {
        plan,
        record,
        status,
    })
}
