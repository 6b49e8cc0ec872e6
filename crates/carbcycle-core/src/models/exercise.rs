// ABOUTME: Exercise guidance and logged-session models for carb-cycling days
// ABOUTME: ExercisePlan, ExerciseRecord, CardioSession, and ExerciseCompletionStatus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::CarbDayType;

/// Recommended training structure for a day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExercisePlan {
    /// Carb-day classification the plan was derived from
    pub carb_day_type: CarbDayType,
    /// Strength training is part of the day
    pub strength_training_recommended: bool,
    /// Upper bound on cardio sessions (0, 1 or 2)
    pub max_cardio_sessions: u8,
    /// Guidance on cardio for the day
    pub cardio_notes: String,
    /// Ordered coaching tips
    pub tips: Vec<String>,
}

/// One logged cardio session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CardioSession {
    /// The session was done
    pub completed: bool,
    /// Duration in minutes
    pub minutes: u32,
}

/// What the user logged for a day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseRecord {
    /// Calendar date of the record
    pub date: NaiveDate,
    /// Strength session done
    pub strength_completed: bool,
    /// Cardio sessions in the order logged
    #[serde(default)]
    pub cardio_sessions: Vec<CardioSession>,
}

/// Completion of a day's exercise against its plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExerciseCompletionStatus {
    /// Strength session done
    pub strength_completed: bool,
    /// Completed cardio sessions (0..=2)
    pub cardio_sessions_completed: u8,
    /// Cardio cap from the plan
    pub max_cardio_sessions: u8,
    /// Minutes across completed cardio sessions
    pub total_cardio_minutes: u32,
    /// The day counts as done (strength only; cardio is supplementary)
    pub is_complete: bool,
}
