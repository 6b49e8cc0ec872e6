// ABOUTME: Nutrition target and meal plan models for carb-cycling days
// ABOUTME: NutritionTargets, MealPortion, FoodRestrictions, and DailyNutritionPlan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::energy::{KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use crate::errors::AppError;
use crate::models::CarbDayType;

/// Daily macro targets
///
/// Calories are never stored independently: the only way to build a value is
/// through [`NutritionTargets::new`], which derives them from the macros.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "MacroGrams")]
pub struct NutritionTargets {
    carbs_g: u32,
    protein_g: u32,
    fat_g: u32,
    calories_kcal: u32,
    water_ml: u32,
}

/// Wire shape used when reading targets back; calories are recomputed
#[derive(Debug, Deserialize)]
struct MacroGrams {
    carbs_g: u32,
    protein_g: u32,
    fat_g: u32,
    water_ml: u32,
}

impl From<MacroGrams> for NutritionTargets {
    fn from(raw: MacroGrams) -> Self {
        Self::new(raw.carbs_g, raw.protein_g, raw.fat_g, raw.water_ml)
    }
}

impl NutritionTargets {
    /// Build targets from macro grams; calories follow from 4/4/9 kcal per gram
    ///
    /// Calories saturate at `u32::MAX` instead of wrapping.
    #[must_use]
    pub const fn new(carbs_g: u32, protein_g: u32, fat_g: u32, water_ml: u32) -> Self {
        Self {
            carbs_g,
            protein_g,
            fat_g,
            calories_kcal: carbs_g
                .saturating_mul(KCAL_PER_GRAM_CARB)
                .saturating_add(protein_g.saturating_mul(KCAL_PER_GRAM_PROTEIN))
                .saturating_add(fat_g.saturating_mul(KCAL_PER_GRAM_FAT)),
            water_ml,
        }
    }

    /// Copy of these targets with a different fat amount (calories re-derived)
    #[must_use]
    pub const fn with_fat(self, fat_g: u32) -> Self {
        Self::new(self.carbs_g, self.protein_g, fat_g, self.water_ml)
    }

    /// Carbohydrate target (g)
    #[must_use]
    pub const fn carbs_g(&self) -> u32 {
        self.carbs_g
    }

    /// Protein target (g)
    #[must_use]
    pub const fn protein_g(&self) -> u32 {
        self.protein_g
    }

    /// Fat target (g)
    #[must_use]
    pub const fn fat_g(&self) -> u32 {
        self.fat_g
    }

    /// Energy target (kcal), derived from the macros
    #[must_use]
    pub const fn calories_kcal(&self) -> u32 {
        self.calories_kcal
    }

    /// Water target (ml)
    #[must_use]
    pub const fn water_ml(&self) -> u32 {
        self.water_ml
    }
}

/// Position of a meal in the planned day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealName {
    /// Meal 1
    Breakfast,
    /// Meal 2
    Lunch,
    /// Meal 3
    Snack,
    /// Meal 4
    Dinner,
}

impl MealName {
    /// Meals in serving order
    pub const IN_ORDER: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];

    /// One-based meal number
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Breakfast => 1,
            Self::Lunch => 2,
            Self::Snack => 3,
            Self::Dinner => 4,
        }
    }
}

/// Carbohydrate food assigned to a meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CarbSource {
    /// Dry rolled oats
    Oatmeal,
    /// Cooked white rice
    Rice,
    /// No carbohydrate food in this meal
    None,
}

/// Protein food assigned to a meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProteinSource {
    /// Skinless chicken breast
    Chicken,
    /// Lean beef
    Beef,
    /// Shrimp
    Shrimp,
}

impl ProteinSource {
    /// Every protein source, the pool a plan draws from
    pub const ALL: [Self; 3] = [Self::Chicken, Self::Beef, Self::Shrimp];
}

impl fmt::Display for ProteinSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chicken => write!(f, "chicken"),
            Self::Beef => write!(f, "beef"),
            Self::Shrimp => write!(f, "shrimp"),
        }
    }
}

impl FromStr for ProteinSource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chicken" => Ok(Self::Chicken),
            "beef" => Ok(Self::Beef),
            "shrimp" => Ok(Self::Shrimp),
            other => Err(AppError::invalid_input(format!(
                "Unknown protein source: {other}"
            ))),
        }
    }
}

/// One prescribed meal of a daily plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPortion {
    /// One-based meal number (1..=4)
    pub meal_number: u8,
    /// Meal name
    pub meal_name: MealName,
    /// Carbohydrate food
    pub carb_source: CarbSource,
    /// Carbohydrate macro grams allotted to this meal
    pub carb_grams: u32,
    /// Weight of the carbohydrate food (g)
    pub carb_food_grams: u32,
    /// Protein food
    pub protein_source: ProteinSource,
    /// Protein macro grams allotted to this meal
    pub protein_grams: u32,
    /// Weight of the protein food (g)
    pub protein_food_grams: u32,
    /// Cooking oil allowed
    pub allow_oil: bool,
    /// Whole eggs (with yolk) allowed
    pub allow_whole_egg: bool,
}

/// Food restrictions in force for a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FoodRestrictions {
    /// No fruit (first month)
    pub no_fruit: bool,
    /// No white sugar (first month)
    pub no_white_sugar: bool,
    /// No white flour (first month)
    pub no_white_flour: bool,
    /// No egg yolk (high days)
    pub no_egg_yolk: bool,
    /// No added oil (high days)
    pub no_oil: bool,
}

/// A fixed daily prescription produced at cycle start
///
/// Persisted by the plan store keyed by `(cycle_id, date)`; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyNutritionPlan {
    /// Cycle the plan belongs to, when generated as part of a batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<Uuid>,
    /// Calendar date, when generated as part of a batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Day number since cycle start, when generated as part of a batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_number: Option<i64>,
    /// Carb-day classification the plan was built for
    pub carb_day_type: CarbDayType,
    /// The four meals in serving order
    pub meals: [MealPortion; 4],
    /// Macro, calorie and water totals
    pub targets: NutritionTargets,
    /// Olive oil for the day (ml); zero when oil is restricted
    pub oliveoil_ml: u32,
    /// Restrictions in force
    pub restrictions: FoodRestrictions,
}

impl DailyNutritionPlan {
    /// Total carbohydrate (g)
    #[must_use]
    pub const fn total_carbs(&self) -> u32 {
        self.targets.carbs_g()
    }

    /// Total protein (g)
    #[must_use]
    pub const fn total_protein(&self) -> u32 {
        self.targets.protein_g()
    }

    /// Total fat (g)
    #[must_use]
    pub const fn total_fat(&self) -> u32 {
        self.targets.fat_g()
    }

    /// Total energy (kcal)
    #[must_use]
    pub const fn total_calories(&self) -> u32 {
        self.targets.calories_kcal()
    }

    /// Water target (ml)
    #[must_use]
    pub const fn water_target(&self) -> u32 {
        self.targets.water_ml()
    }
}
