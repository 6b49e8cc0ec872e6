// ABOUTME: Core data models for the carb-cycling engine
// ABOUTME: Re-exports body profile, nutrition, exercise and compliance structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! # Data Models
//!
//! Plain structures consumed from and handed back to external collaborators
//! (body-profile store, plan store, intake and exercise record stores). None
//! of them know how they are stored.

mod body;
mod compliance;
mod exercise;
mod nutrition;

pub use body::{CarbDayType, Gender, UserBodyProfile};
pub use compliance::{ComplianceRecord, StreakStatus};
pub use exercise::{CardioSession, ExerciseCompletionStatus, ExercisePlan, ExerciseRecord};
pub use nutrition::{
    CarbSource, DailyNutritionPlan, FoodRestrictions, MealName, MealPortion, NutritionTargets,
    ProteinSource,
};
