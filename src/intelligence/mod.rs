// ABOUTME: Carb-cycling planning engine: calendar, targets, portions, plans, exercise and streaks
// ABOUTME: Pure functions over plain models; randomness and "today" are always caller-supplied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! # Intelligence Module
//!
//! The planning engine for the 112113 carb-cycling protocol. Data flows
//! leaf to root:
//!
//! 1. [`cycle_calendar`] maps dates to a day number and a carb-day type
//! 2. [`macro_targets`] turns a body profile and carb-day type into targets
//! 3. [`food_portions`] and [`meal_planner`] turn targets into a daily plan
//! 4. [`exercise_plan`] gives training guidance from the carb-day type alone
//! 5. [`compliance_streak`] scores the first-month restriction records
//!
//! Nothing here holds state, reads a clock or does I/O, so every function is
//! safe to call concurrently.

/// Exact-sum splitting of a total across buckets
pub mod allocation;
/// Date to cycle-position arithmetic
pub mod cycle_calendar;
/// First-month restriction streak
pub mod compliance_streak;
/// Training structure and completion status
pub mod exercise_plan;
/// Macro grams to food quantities
pub mod food_portions;
/// Daily macro, calorie and water targets
pub mod macro_targets;
/// Daily and per-cycle nutrition plans
pub mod meal_planner;

pub use allocation::split_with_remainder;
pub use compliance_streak::{compliance_streak, compliance_streak_for_cycle, streak_status};
pub use cycle_calendar::{
    carb_day_type, cycle_day_position, cycle_number, cycle_start_date_for_cycle,
    date_for_day_number, day_number_for_timestamps, day_number_in_cycle, is_first_month,
    position_in_cycle, CycleDayPosition,
};
pub use exercise_plan::{completion_status, generate_exercise_plan};
pub use food_portions::{
    distribute_carbs_across_meals, distribute_protein_across_meals, egg_macros,
    eggs_for_protein, grams_for_carb, grams_for_protein, oil_ml_for_fat, reference_meat_grams,
    reference_portions, CarbDistribution, EggKind, EggMacros, MinuteRange, ReferencePortions,
};
pub use macro_targets::{
    calories_from_macros, carb_multiplier, compute_targets, fat_multiplier, lean_mass_kg,
    protein_multiplier, water_target_ml,
};
pub use meal_planner::{
    food_restrictions, food_restrictions_for_day, generate_cycle_plans, generate_daily_plan,
    random_protein_source,
};
