// ABOUTME: Daily macro targets for carb-cycling days from body composition
// ABOUTME: Lean mass, carb/protein/fat multipliers, water target and derived calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Macro Target Calculator
//!
//! Turns a [`UserBodyProfile`] and a [`CarbDayType`] into [`NutritionTargets`].
//!
//! # Formulas
//!
//! - lean mass: `weight * (1 - body_fat)`
//! - carbs: `round(lean_mass * {1, 2, 3})` for LOW, MEDIUM, HIGH
//! - protein: `round(weight * m)` where `m` comes from the body-fat bracket
//!   (`>= 0.30` gives 1.0, or 0.75 for women; `>= 0.25` gives 1.5;
//!   `>= 0.20` gives 2.0; otherwise 2.5)
//! - fat: `round(lean_mass * {0.8, 0.5, 0.3})` for LOW, MEDIUM, HIGH
//! - calories: `carbs * 4 + protein * 4 + fat * 9`
//! - water: 4500 ml at or above 85 kg, otherwise 4000 ml
//!
//! Protein deliberately uses total body weight; the lower multiplier at higher
//! body fat stands in for the lean-mass correction.
//!
//! Inputs are expected to be validated with [`UserBodyProfile::validate`]
//! beforehand; nothing in here fails.

use carbcycle_core::constants::macros::{
    CARB_MULTIPLIER_HIGH, CARB_MULTIPLIER_LOW, CARB_MULTIPLIER_MEDIUM, FAT_MULTIPLIER_HIGH,
    FAT_MULTIPLIER_LOW, FAT_MULTIPLIER_MEDIUM, PROTEIN_BRACKET_HIGH_FAT,
    PROTEIN_BRACKET_LOW_FAT, PROTEIN_BRACKET_MODERATE_FAT, PROTEIN_MULTIPLIER_HIGH_FAT_FEMALE,
    PROTEIN_MULTIPLIER_HIGH_FAT_MALE, PROTEIN_MULTIPLIER_LEAN, PROTEIN_MULTIPLIER_LOW_FAT,
    PROTEIN_MULTIPLIER_MODERATE_FAT,
};
use carbcycle_core::constants::water::{
    HEAVY_TARGET_ML, HEAVY_WEIGHT_THRESHOLD_KG, STANDARD_TARGET_ML,
};
use carbcycle_core::models::{CarbDayType, Gender, NutritionTargets, UserBodyProfile};
use tracing::debug;

/// Lean body mass in kilograms
#[must_use]
pub fn lean_mass_kg(profile: &UserBodyProfile) -> f64 {
    profile.weight_kg * (1.0 - profile.body_fat_fraction)
}

/// Carb grams per kilogram of lean mass
#[must_use]
pub const fn carb_multiplier(day_type: CarbDayType) -> f64 {
    match day_type {
        CarbDayType::Low => CARB_MULTIPLIER_LOW,
        CarbDayType::Medium => CARB_MULTIPLIER_MEDIUM,
        CarbDayType::High => CARB_MULTIPLIER_HIGH,
    }
}

/// Fat grams per kilogram of lean mass
#[must_use]
pub const fn fat_multiplier(day_type: CarbDayType) -> f64 {
    match day_type {
        CarbDayType::Low => FAT_MULTIPLIER_LOW,
        CarbDayType::Medium => FAT_MULTIPLIER_MEDIUM,
        CarbDayType::High => FAT_MULTIPLIER_HIGH,
    }
}

/// Protein grams per kilogram of total body weight
///
/// Brackets use inclusive lower bounds and are checked from the highest down.
#[must_use]
pub fn protein_multiplier(body_fat_fraction: f64, gender: Gender) -> f64 {
    if body_fat_fraction >= PROTEIN_BRACKET_HIGH_FAT {
        match gender {
            Gender::Male => PROTEIN_MULTIPLIER_HIGH_FAT_MALE,
            Gender::Female => PROTEIN_MULTIPLIER_HIGH_FAT_FEMALE,
        }
    } else if body_fat_fraction >= PROTEIN_BRACKET_MODERATE_FAT {
        PROTEIN_MULTIPLIER_MODERATE_FAT
    } else if body_fat_fraction >= PROTEIN_BRACKET_LOW_FAT {
        PROTEIN_MULTIPLIER_LOW_FAT
    } else {
        PROTEIN_MULTIPLIER_LEAN
    }
}

/// Daily water target in millilitres
#[must_use]
pub fn water_target_ml(weight_kg: f64) -> u32 {
    if weight_kg >= HEAVY_WEIGHT_THRESHOLD_KG {
        HEAVY_TARGET_ML
    } else {
        STANDARD_TARGET_ML
    }
}

/// Energy content of the given macro grams, saturating at `u32::MAX`
#[must_use]
pub const fn calories_from_macros(carbs_g: u32, protein_g: u32, fat_g: u32) -> u32 {
    NutritionTargets::new(carbs_g, protein_g, fat_g, 0).calories_kcal()
}

/// Round to the nearest gram, half away from zero; negatives clamp to zero
fn round_grams(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Compute the day's macro, calorie and water targets
///
/// # Arguments
///
/// * `profile` - Validated body composition snapshot
/// * `day_type` - Carb classification of the day
///
/// # Returns
///
/// Targets whose calories are derived from the three macros
#[must_use]
pub fn compute_targets(profile: &UserBodyProfile, day_type: CarbDayType) -> NutritionTargets {
    let lean_mass = lean_mass_kg(profile);

    let carbs_g = round_grams(lean_mass * carb_multiplier(day_type));
    let protein_g = round_grams(
        profile.weight_kg * protein_multiplier(profile.body_fat_fraction, profile.gender),
    );
    let fat_g = round_grams(lean_mass * fat_multiplier(day_type));

    let targets = NutritionTargets::new(carbs_g, protein_g, fat_g, water_target_ml(profile.weight_kg));

    debug!(
        carb_day = %day_type,
        lean_mass_kg = lean_mass,
        carbs_g,
        protein_g,
        fat_g,
        calories_kcal = targets.calories_kcal(),
        "Computed macro targets"
    );

    targets
}
