// ABOUTME: Daily nutrition plan generation for carb-cycling days
// ABOUTME: Four meals with food portions, random protein sources, oil and restriction flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Meal Planner
//!
//! Builds the fixed [`DailyNutritionPlan`] prescribed for a day:
//!
//! | meal      | carbs                     | protein                 |
//! |-----------|---------------------------|-------------------------|
//! | breakfast | oatmeal, 1/3 of carbs     | 1/4 of protein          |
//! | lunch     | rice, 1/3 of carbs        | 1/4 of protein          |
//! | snack     | none                      | 1/4 of protein          |
//! | dinner    | rice, carb remainder      | protein remainder       |
//!
//! Each meal draws its protein source uniformly from chicken, beef and shrimp.
//! The random source is always supplied by the caller, so a seeded generator
//! reproduces a plan exactly.

use carbcycle_core::constants::meals::MEALS_PER_DAY;
use carbcycle_core::models::{
    CarbDayType, CarbSource, DailyNutritionPlan, FoodRestrictions, MealName, MealPortion,
    NutritionTargets, ProteinSource, UserBodyProfile,
};
use carbcycle_core::{AppError, AppResult};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};
use uuid::Builder;

use super::cycle_calendar::{carb_day_type, date_for_day_number, is_first_month};
use super::food_portions::{
    distribute_carbs_across_meals, distribute_protein_across_meals, grams_for_carb,
    grams_for_protein, oil_ml_for_fat,
};
use super::macro_targets::compute_targets;
use crate::config::{HighDayFatPolicy, ProtocolConfig};

/// Pick a protein source uniformly at random
pub fn random_protein_source<R: Rng + ?Sized>(rng: &mut R) -> ProteinSource {
    ProteinSource::ALL
        .choose(rng)
        .copied()
        .unwrap_or(ProteinSource::Chicken)
}

/// Restrictions for a day when the first-month window is in force
///
/// Fruit, white sugar and white flour are always excluded; egg yolks and
/// added oil are excluded on high days only.
#[must_use]
pub fn food_restrictions(day_type: CarbDayType) -> FoodRestrictions {
    let high = day_type == CarbDayType::High;
    FoodRestrictions {
        no_fruit: true,
        no_white_sugar: true,
        no_white_flour: true,
        no_egg_yolk: high,
        no_oil: high,
    }
}

/// Restrictions for a specific day of a cycle
///
/// The fruit, sugar and flour exclusions lapse once `day_number` is past the
/// restriction window; the high-day yolk and oil exclusions never do.
#[must_use]
pub fn food_restrictions_for_day(
    day_type: CarbDayType,
    day_number: i64,
    window_days: i64,
) -> FoodRestrictions {
    let first_month = is_first_month(day_number, window_days);
    FoodRestrictions {
        no_fruit: first_month,
        no_white_sugar: first_month,
        no_white_flour: first_month,
        ..food_restrictions(day_type)
    }
}

fn plan_targets(
    profile: &UserBodyProfile,
    day_type: CarbDayType,
    config: &ProtocolConfig,
) -> NutritionTargets {
    let targets = compute_targets(profile, day_type);
    match (day_type, config.high_day_fat_policy) {
        (CarbDayType::High, HighDayFatPolicy::Zero) => targets.with_fat(0),
        _ => targets,
    }
}

fn build_meals<R: Rng + ?Sized>(
    targets: &NutritionTargets,
    restrictions: FoodRestrictions,
    config: &ProtocolConfig,
    rng: &mut R,
) -> [MealPortion; MEALS_PER_DAY] {
    let carbs = distribute_carbs_across_meals(targets.carbs_g());
    let protein = distribute_protein_across_meals(targets.protein_g());
    let densities = &config.generation_densities;

    MealName::IN_ORDER.map(|meal_name| {
        let (carb_source, carb_grams) = match meal_name {
            MealName::Breakfast => (CarbSource::Oatmeal, carbs.breakfast),
            MealName::Lunch => (CarbSource::Rice, carbs.lunch),
            MealName::Snack => (CarbSource::None, 0),
            MealName::Dinner => (CarbSource::Rice, carbs.dinner),
        };
        let protein_grams = protein[usize::from(meal_name.number() - 1)];
        let protein_source = random_protein_source(rng);

        MealPortion {
            meal_number: meal_name.number(),
            meal_name,
            carb_source,
            carb_grams,
            carb_food_grams: grams_for_carb(carb_grams, carb_source, densities),
            protein_source,
            protein_grams,
            protein_food_grams: grams_for_protein(protein_grams, protein_source, &densities.protein),
            allow_oil: !restrictions.no_oil,
            allow_whole_egg: !restrictions.no_egg_yolk,
        }
    })
}

fn assemble_plan<R: Rng + ?Sized>(
    profile: &UserBodyProfile,
    day_type: CarbDayType,
    restrictions: FoodRestrictions,
    config: &ProtocolConfig,
    rng: &mut R,
) -> DailyNutritionPlan {
    let targets = plan_targets(profile, day_type, config);
    let meals = build_meals(&targets, restrictions, config, rng);
    let oliveoil_ml = if restrictions.no_oil {
        0
    } else {
        oil_ml_for_fat(targets.fat_g(), &config.generation_densities)
    };

    DailyNutritionPlan {
        cycle_id: None,
        date: None,
        day_number: None,
        carb_day_type: day_type,
        meals,
        targets,
        oliveoil_ml,
        restrictions,
    }
}

/// Generate the prescribed plan for one day
///
/// # Arguments
///
/// * `profile` - Validated body composition snapshot
/// * `day_type` - Carb classification of the day
/// * `config` - Density tables and the high-day fat policy
/// * `rng` - Random source for the per-meal protein draw
///
/// # Returns
///
/// A plan whose meal carbs and protein sum exactly to the day's targets
pub fn generate_daily_plan<R: Rng + ?Sized>(
    profile: &UserBodyProfile,
    day_type: CarbDayType,
    config: &ProtocolConfig,
    rng: &mut R,
) -> DailyNutritionPlan {
    let plan = assemble_plan(profile, day_type, food_restrictions(day_type), config, rng);

    debug!(
        carb_day = %day_type,
        plan.calories = plan.total_calories(),
        plan.oliveoil_ml = plan.oliveoil_ml,
        "Generated daily nutrition plan"
    );

    plan
}

/// Generate one plan per calendar day of a cycle, starting at `cycle_start`
///
/// Every plan is stamped with the same freshly drawn cycle id, its date, its
/// day number and its carb-day type.
///
/// # Errors
///
/// Returns a `ValueOutOfRange` error when the last requested day falls past
/// the end of the supported calendar
pub fn generate_cycle_plans<R: Rng + ?Sized>(
    profile: &UserBodyProfile,
    cycle_start: NaiveDate,
    days: u32,
    config: &ProtocolConfig,
    rng: &mut R,
) -> AppResult<Vec<DailyNutritionPlan>> {
    if days > 0 && date_for_day_number(cycle_start, i64::from(days)).is_none() {
        return Err(
            AppError::out_of_range("Cycle plan extends past the supported calendar range")
                .with_details(serde_json::json!({
                    "cycle_start": cycle_start,
                    "days": days,
                })),
        );
    }

    let cycle_id = Builder::from_random_bytes(rng.gen()).into_uuid();

    let plans: Vec<DailyNutritionPlan> = cycle_start
        .iter_days()
        .zip(1..=i64::from(days))
        .map(|(date, day_number)| {
            let day_type = carb_day_type(day_number);
            let restrictions =
                food_restrictions_for_day(day_type, day_number, config.restriction_window_days);
            let mut plan = assemble_plan(profile, day_type, restrictions, config, rng);
            plan.cycle_id = Some(cycle_id);
            plan.date = Some(date);
            plan.day_number = Some(day_number);

            debug!(
                cycle.day = day_number,
                carb_day = %day_type,
                plan.calories = plan.total_calories(),
                "Generated cycle day plan"
            );
            plan
        })
        .collect();

    info!(
        cycle.id = %cycle_id,
        cycle.start = %cycle_start,
        plan.count = plans.len(),
        "Generated cycle nutrition plans"
    );

    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carbcycle_core::models::Gender;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn profile() -> UserBodyProfile {
        UserBodyProfile::new(70.0, 0.25, Gender::Male)
    }

    #[test]
    fn test_low_day_plan_matches_targets() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let plan = generate_daily_plan(
            &profile(),
            CarbDayType::Low,
            &ProtocolConfig::default(),
            &mut rng,
        );

        assert_eq!(plan.total_carbs(), 53);
        assert_eq!(plan.total_protein(), 105);
        assert_eq!(plan.total_fat(), 42);
        assert_eq!(plan.total_calories(), 1010);
        assert_eq!(plan.oliveoil_ml, 42);
        assert_eq!(plan.meals[2].carb_source, CarbSource::None);
        assert_eq!(plan.meals[2].carb_food_grams, 0);
        assert!(plan.meals.iter().all(|m| m.allow_oil && m.allow_whole_egg));
    }

    #[test]
    fn test_high_day_restricts_oil_and_yolks() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let plan = generate_daily_plan(
            &profile(),
            CarbDayType::High,
            &ProtocolConfig::default(),
            &mut rng,
        );

        assert_eq!(plan.total_fat(), 16);
        assert_eq!(plan.oliveoil_ml, 0);
        assert!(plan.restrictions.no_oil && plan.restrictions.no_egg_yolk);
        assert!(plan.meals.iter().all(|m| !m.allow_oil && !m.allow_whole_egg));
    }

    #[test]
    fn test_zero_fat_policy_applies_to_high_days_only() {
        let config = ProtocolConfig {
            high_day_fat_policy: HighDayFatPolicy::Zero,
            ..ProtocolConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let high = generate_daily_plan(&profile(), CarbDayType::High, &config, &mut rng);
        let low = generate_daily_plan(&profile(), CarbDayType::Low, &config, &mut rng);

        assert_eq!(high.total_fat(), 0);
        assert_eq!(high.total_calories(), 158 * 4 + 105 * 4);
        assert_eq!(low.total_fat(), 42);
    }

    #[test]
    fn test_restrictions_lapse_after_window() {
        let inside = food_restrictions_for_day(CarbDayType::High, 30, 30);
        let outside = food_restrictions_for_day(CarbDayType::High, 31, 30);

        assert!(inside.no_fruit && inside.no_white_sugar && inside.no_white_flour);
        assert!(!outside.no_fruit && !outside.no_white_sugar && !outside.no_white_flour);
        assert!(outside.no_oil && outside.no_egg_yolk);
    }

    #[test]
    fn test_cycle_plans_past_calendar_end_are_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let result = generate_cycle_plans(
            &profile(),
            NaiveDate::MAX,
            2,
            &ProtocolConfig::default(),
            &mut rng,
        );
        assert!(result.is_err());

        let last_day = generate_cycle_plans(
            &profile(),
            NaiveDate::MAX,
            1,
            &ProtocolConfig::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(last_day[0].date, Some(NaiveDate::MAX));
    }
}
