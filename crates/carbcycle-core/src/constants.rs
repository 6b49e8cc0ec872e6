// ABOUTME: Fixed numbers of the 112113 carb-cycling protocol grouped by domain
// ABOUTME: Cycle pattern, macro multipliers, energy densities, water and egg constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Protocol constants
//!
//! These values define the protocol itself and are deliberately not part of
//! runtime configuration. Food density tables, which are lookup data rather
//! than protocol, live in the engine crate's configuration.

/// Cycle structure
pub mod cycle {
    use crate::models::CarbDayType;

    /// Length of one carb cycle in days
    pub const CYCLE_LENGTH_DAYS: i64 = 6;

    /// The repeating 112113 pattern: day 3 is medium, day 6 is high
    pub const CARB_DAY_PATTERN: [CarbDayType; 6] = [
        CarbDayType::Low,
        CarbDayType::Low,
        CarbDayType::Medium,
        CarbDayType::Low,
        CarbDayType::Low,
        CarbDayType::High,
    ];

    /// Days (from cycle day 1) during which the first-month food restrictions apply
    pub const FIRST_MONTH_DAYS: i64 = 30;
}

/// Accepted body-profile ranges
pub mod body {
    /// Heaviest body weight (kg) a profile may carry
    pub const MAX_WEIGHT_KG: f64 = 650.0;
}

/// Macronutrient multipliers (grams per kilogram)
pub mod macros {
    /// Carbs per kg lean mass on a low day
    pub const CARB_MULTIPLIER_LOW: f64 = 1.0;
    /// Carbs per kg lean mass on a medium day
    pub const CARB_MULTIPLIER_MEDIUM: f64 = 2.0;
    /// Carbs per kg lean mass on a high day
    pub const CARB_MULTIPLIER_HIGH: f64 = 3.0;

    /// Fat per kg lean mass on a low day
    pub const FAT_MULTIPLIER_LOW: f64 = 0.8;
    /// Fat per kg lean mass on a medium day
    pub const FAT_MULTIPLIER_MEDIUM: f64 = 0.5;
    /// Fat per kg lean mass on a high day
    pub const FAT_MULTIPLIER_HIGH: f64 = 0.3;

    /// Body-fat fraction at or above which the lowest protein bracket applies
    pub const PROTEIN_BRACKET_HIGH_FAT: f64 = 0.30;
    /// Body-fat fraction lower bound of the second bracket
    pub const PROTEIN_BRACKET_MODERATE_FAT: f64 = 0.25;
    /// Body-fat fraction lower bound of the third bracket
    pub const PROTEIN_BRACKET_LOW_FAT: f64 = 0.20;

    /// Protein per kg total weight, body fat >= 30%, male
    pub const PROTEIN_MULTIPLIER_HIGH_FAT_MALE: f64 = 1.0;
    /// Protein per kg total weight, body fat >= 30%, female
    pub const PROTEIN_MULTIPLIER_HIGH_FAT_FEMALE: f64 = 0.75;
    /// Protein per kg total weight, body fat in [25%, 30%)
    pub const PROTEIN_MULTIPLIER_MODERATE_FAT: f64 = 1.5;
    /// Protein per kg total weight, body fat in [20%, 25%)
    pub const PROTEIN_MULTIPLIER_LOW_FAT: f64 = 2.0;
    /// Protein per kg total weight, body fat below 20%
    pub const PROTEIN_MULTIPLIER_LEAN: f64 = 2.5;
}

/// Atwater energy densities
pub mod energy {
    /// kcal per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARB: u32 = 4;
    /// kcal per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: u32 = 4;
    /// kcal per gram of fat
    pub const KCAL_PER_GRAM_FAT: u32 = 9;
}

/// Daily water targets
pub mod water {
    /// Body weight (kg) at or above which the higher water target applies
    pub const HEAVY_WEIGHT_THRESHOLD_KG: f64 = 85.0;
    /// Water target for heavier users (ml)
    pub const HEAVY_TARGET_ML: u32 = 4500;
    /// Water target for everyone else (ml)
    pub const STANDARD_TARGET_ML: u32 = 4000;
}

/// Egg macro content per egg
pub mod eggs {
    /// Protein in one whole egg (g)
    pub const WHOLE_EGG_PROTEIN_G: f64 = 6.0;
    /// Fat in one whole egg (g)
    pub const WHOLE_EGG_FAT_G: f64 = 5.0;
    /// Protein in one egg white (g)
    pub const EGG_WHITE_PROTEIN_G: f64 = 3.6;
    /// Fat in one egg white (g)
    pub const EGG_WHITE_FAT_G: f64 = 0.0;
}

/// Meal layout of a planned day
pub mod meals {
    /// Meals per planned day
    pub const MEALS_PER_DAY: usize = 4;
    /// Meals that carry the day's carbohydrate (breakfast, lunch, dinner)
    pub const CARB_MEALS_PER_DAY: usize = 3;
}
