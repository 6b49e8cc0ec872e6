// ABOUTME: Exercise guidance per carb day and completion status against logged sessions
// ABOUTME: Strength is mandatory every day; cardio is capped and supplementary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

use carbcycle_core::models::{
    CarbDayType, ExerciseCompletionStatus, ExercisePlan, ExerciseRecord,
};

/// Cardio slots an exercise record can hold
const CARDIO_SLOTS: usize = 2;

/// Longest optional cardio session on a high day (minutes)
pub const HIGH_DAY_CARDIO_LIMIT_MINUTES: u32 = 20;

fn high_day_plan() -> ExercisePlan {
    ExercisePlan {
        carb_day_type: CarbDayType::High,
        strength_training_recommended: true,
        max_cardio_sessions: 1,
        cardio_notes: format!(
            "Do strength training; optionally up to {HIGH_DAY_CARDIO_LIMIT_MINUTES} minutes of cardio afterwards, or skip cardio entirely."
        ),
        tips: vec![
            "Train heavy today: the extra carbohydrate fuels a hard strength session.".into(),
            "Eat the largest rice portions around training.".into(),
            "Keep any cardio short and easy.".into(),
        ],
    }
}

fn standard_plan(day_type: CarbDayType) -> ExercisePlan {
    ExercisePlan {
        carb_day_type: day_type,
        strength_training_recommended: true,
        max_cardio_sessions: 2,
        cardio_notes:
            "Do strength training, then up to two cardio sessions (for example one after training and one later in the day)."
                .into(),
        tips: vec![
            "Strength first, cardio afterwards.".into(),
            "Moderate steady-state cardio works best on lower-carb days.".into(),
            "Drink to the water target, especially around cardio.".into(),
        ],
    }
}

/// Recommended training structure for a carb day
#[must_use]
pub fn generate_exercise_plan(day_type: CarbDayType) -> ExercisePlan {
    match day_type {
        CarbDayType::High => high_day_plan(),
        CarbDayType::Low | CarbDayType::Medium => standard_plan(day_type),
    }
}

/// Compare a logged record against the day's plan
///
/// A missing record reports nothing completed. The day is complete as soon
/// as strength training is done; cardio never changes `is_complete`.
#[must_use]
pub fn completion_status(
    record: Option<&ExerciseRecord>,
    plan: &ExercisePlan,
) -> ExerciseCompletionStatus {
    let Some(record) = record else {
        return ExerciseCompletionStatus {
            strength_completed: false,
            cardio_sessions_completed: 0,
            max_cardio_sessions: plan.max_cardio_sessions,
            total_cardio_minutes: 0,
            is_complete: false,
        };
    };

    let (sessions, minutes) = record
        .cardio_sessions
        .iter()
        .take(CARDIO_SLOTS)
        .filter(|session| session.completed)
        .fold((0_u8, 0_u32), |(count, total), session| {
            (count + 1, total.saturating_add(session.minutes))
        });

    ExerciseCompletionStatus {
        strength_completed: record.strength_completed,
        cardio_sessions_completed: sessions,
        max_cardio_sessions: plan.max_cardio_sessions,
        total_cardio_minutes: minutes,
        is_complete: record.strength_completed,
    }
}
