// ABOUTME: Conversions from macro grams to food quantities and per-meal macro distribution
// ABOUTME: Oatmeal, rice, meat, oil and egg portions plus the static reference-portion table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Food Portion Translator
//!
//! Converts macro grams into food weights using nutrient densities expressed
//! per 100 g (or per ml for oil): `food = round(macro / (density / 100))`.
//! Zero macro grams always map to zero food grams.
//!
//! The [`reference_portions`] table is an independent set of hand-tuned
//! portions shown as suggestions before intake is logged. It is not derived
//! from the macro calculator and may disagree with generated plans.

use carbcycle_core::constants::eggs::{
    EGG_WHITE_FAT_G, EGG_WHITE_PROTEIN_G, WHOLE_EGG_FAT_G, WHOLE_EGG_PROTEIN_G,
};
use carbcycle_core::constants::meals::{CARB_MEALS_PER_DAY, MEALS_PER_DAY};
use carbcycle_core::models::{CarbDayType, CarbSource, ProteinSource};
use serde::{Deserialize, Serialize};

use super::allocation::split_with_remainder;
use crate::config::{GenerationDensities, ProteinDensities, ProtocolConfig};

/// Kind of egg portion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EggKind {
    /// Whole egg including yolk
    Whole,
    /// Egg white only
    WhiteOnly,
}

impl EggKind {
    const fn protein_g(self) -> f64 {
        match self {
            Self::Whole => WHOLE_EGG_PROTEIN_G,
            Self::WhiteOnly => EGG_WHITE_PROTEIN_G,
        }
    }

    const fn fat_g(self) -> f64 {
        match self {
            Self::Whole => WHOLE_EGG_FAT_G,
            Self::WhiteOnly => EGG_WHITE_FAT_G,
        }
    }
}

/// Macros supplied by a number of eggs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EggMacros {
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// Carbohydrate grams per carb meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarbDistribution {
    /// Meal 1
    pub breakfast: u32,
    /// Meal 2
    pub lunch: u32,
    /// Meal 4; absorbs the rounding remainder
    pub dinner: u32,
}

impl CarbDistribution {
    /// Sum of the three meals
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.breakfast + self.lunch + self.dinner
    }
}

/// Inclusive range of minutes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MinuteRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound
    pub max: u32,
}

/// Suggested portions for a carb day, shown before intake is logged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferencePortions {
    /// Dry oatmeal at breakfast (g)
    pub oatmeal_g: u32,
    /// Whole eggs at breakfast
    pub whole_eggs: u32,
    /// Egg whites at breakfast
    pub egg_whites: u32,
    /// Cooked rice at lunch (g)
    pub lunch_rice_g: u32,
    /// Cooked rice with the snack (g)
    pub snack_rice_g: u32,
    /// Cooked rice at dinner (g)
    pub dinner_rice_g: u32,
    /// Meat or seafood at lunch (g)
    pub lunch_meat_g: u32,
    /// Meat or seafood with the snack (g)
    pub snack_meat_g: u32,
    /// Meat or seafood at dinner (g)
    pub dinner_meat_g: u32,
    /// Strength training duration
    pub strength_minutes: MinuteRange,
    /// Cardio duration
    pub cardio_minutes: MinuteRange,
}

static LOW_DAY_PORTIONS: ReferencePortions = ReferencePortions {
    oatmeal_g: 40,
    whole_eggs: 1,
    egg_whites: 3,
    lunch_rice_g: 100,
    snack_rice_g: 50,
    dinner_rice_g: 80,
    lunch_meat_g: 150,
    snack_meat_g: 100,
    dinner_meat_g: 150,
    strength_minutes: MinuteRange { min: 45, max: 60 },
    cardio_minutes: MinuteRange { min: 30, max: 40 },
};

static MEDIUM_DAY_PORTIONS: ReferencePortions = ReferencePortions {
    oatmeal_g: 60,
    whole_eggs: 1,
    egg_whites: 3,
    lunch_rice_g: 150,
    snack_rice_g: 75,
    dinner_rice_g: 150,
    lunch_meat_g: 150,
    snack_meat_g: 100,
    dinner_meat_g: 150,
    strength_minutes: MinuteRange { min: 45, max: 60 },
    cardio_minutes: MinuteRange { min: 30, max: 40 },
};

static HIGH_DAY_PORTIONS: ReferencePortions = ReferencePortions {
    oatmeal_g: 80,
    whole_eggs: 0,
    egg_whites: 4,
    lunch_rice_g: 250,
    snack_rice_g: 0,
    dinner_rice_g: 250,
    lunch_meat_g: 120,
    snack_meat_g: 80,
    dinner_meat_g: 120,
    strength_minutes: MinuteRange { min: 60, max: 75 },
    cardio_minutes: MinuteRange { min: 0, max: 20 },
};

/// Static suggested portions for a carb day type
#[must_use]
pub fn reference_portions(day_type: CarbDayType) -> &'static ReferencePortions {
    match day_type {
        CarbDayType::Low => &LOW_DAY_PORTIONS,
        CarbDayType::Medium => &MEDIUM_DAY_PORTIONS,
        CarbDayType::High => &HIGH_DAY_PORTIONS,
    }
}

/// Food grams supplying `nutrient_g` at `density_per_100g`
fn food_grams(nutrient_g: u32, density_per_100g: f64) -> u32 {
    if nutrient_g == 0 {
        return 0;
    }
    (f64::from(nutrient_g) / (density_per_100g / 100.0))
        .round()
        .max(0.0) as u32
}

/// Grams of carbohydrate food supplying `carb_g` grams of carbohydrate
///
/// [`CarbSource::None`] always yields zero.
#[must_use]
pub fn grams_for_carb(carb_g: u32, source: CarbSource, densities: &GenerationDensities) -> u32 {
    match source {
        CarbSource::Oatmeal => food_grams(carb_g, densities.oatmeal_carbs_per_100g),
        CarbSource::Rice => food_grams(carb_g, densities.rice_carbs_per_100g),
        CarbSource::None => 0,
    }
}

/// Grams of meat or seafood supplying `protein_g` grams of protein
///
/// Works with either density table; plan generation passes the generation
/// table, suggestion hints pass the reference table.
#[must_use]
pub fn grams_for_protein(protein_g: u32, source: ProteinSource, table: &ProteinDensities) -> u32 {
    food_grams(protein_g, table.per_100g(source))
}

/// Olive oil millilitres supplying `fat_g` grams of fat
#[must_use]
pub fn oil_ml_for_fat(fat_g: u32, densities: &GenerationDensities) -> u32 {
    if fat_g == 0 {
        return 0;
    }
    (f64::from(fat_g) / densities.olive_oil_fat_per_ml)
        .round()
        .max(0.0) as u32
}

/// Number of eggs supplying `protein_g` grams of protein
#[must_use]
pub fn eggs_for_protein(protein_g: u32, kind: EggKind) -> u32 {
    (f64::from(protein_g) / kind.protein_g()).round().max(0.0) as u32
}

/// Protein and fat in `count` eggs
#[must_use]
pub fn egg_macros(count: u32, kind: EggKind) -> EggMacros {
    EggMacros {
        protein_g: f64::from(count) * kind.protein_g(),
        fat_g: f64::from(count) * kind.fat_g(),
    }
}

/// Split the day's carbs across breakfast, lunch and dinner
///
/// The snack carries no carbs in generated plans.
#[must_use]
pub fn distribute_carbs_across_meals(total_carbs: u32) -> CarbDistribution {
    let slots = split_with_remainder(total_carbs, CARB_MEALS_PER_DAY);
    CarbDistribution {
        breakfast: slots[0],
        lunch: slots[1],
        dinner: slots[2],
    }
}

/// Split the day's protein across the four meals in serving order
#[must_use]
pub fn distribute_protein_across_meals(total_protein: u32) -> [u32; MEALS_PER_DAY] {
    let mut meals = [0; MEALS_PER_DAY];
    meals.copy_from_slice(&split_with_remainder(total_protein, MEALS_PER_DAY));
    meals
}

/// Suggested meat grams for a protein amount, using the reference table
#[must_use]
pub fn reference_meat_grams(protein_g: u32, source: ProteinSource, config: &ProtocolConfig) -> u32 {
    grams_for_protein(protein_g, source, &config.reference_densities)
}
