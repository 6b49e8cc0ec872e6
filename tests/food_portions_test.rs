// ABOUTME: Integration tests for the food portion translator
// ABOUTME: Density conversions, exact-sum meal distribution, eggs, oil and reference portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::ptr;

use carbcycle::config::{GenerationDensities, ProteinDensities, ProtocolConfig};
use carbcycle::intelligence::{
    distribute_carbs_across_meals, distribute_protein_across_meals, egg_macros, eggs_for_protein,
    grams_for_carb, grams_for_protein, oil_ml_for_fat, reference_meat_grams, reference_portions,
    split_with_remainder, EggKind,
};
use carbcycle::models::{CarbDayType, CarbSource, ProteinSource};

#[test]
fn test_carb_distribution_sums_exactly() {
    common::init_test_logging();
    for total in 0..=1000 {
        let split = distribute_carbs_across_meals(total);
        assert_eq!(split.breakfast + split.lunch + split.dinner, total);
        assert_eq!(split.breakfast, split.lunch);
    }
}

#[test]
fn test_protein_distribution_sums_exactly() {
    for total in 0..=1000 {
        let meals = distribute_protein_across_meals(total);
        assert_eq!(meals.iter().sum::<u32>(), total);
        assert_eq!(meals[0], meals[1]);
        assert_eq!(meals[1], meals[2]);
    }
}

#[test]
fn test_remainder_goes_to_last_slot() {
    assert_eq!(split_with_remainder(100, 3), vec![33, 33, 34]);
    assert_eq!(split_with_remainder(101, 3), vec![34, 34, 33]);
    assert_eq!(distribute_protein_across_meals(3), [1, 1, 1, 0]);
    assert_eq!(distribute_protein_across_meals(2), [0, 0, 0, 2]);
}

#[test]
fn test_generation_densities() {
    let densities = GenerationDensities::default();

    assert_eq!(grams_for_carb(66, CarbSource::Oatmeal, &densities), 100);
    assert_eq!(grams_for_carb(28, CarbSource::Rice, &densities), 100);
    assert_eq!(grams_for_carb(53, CarbSource::Rice, &densities), 189);
    assert_eq!(grams_for_protein(31, ProteinSource::Chicken, &densities.protein), 100);
    assert_eq!(grams_for_protein(26, ProteinSource::Beef, &densities.protein), 100);
    assert_eq!(grams_for_protein(24, ProteinSource::Shrimp, &densities.protein), 100);
}

#[test]
fn test_zero_macro_is_zero_food() {
    let densities = GenerationDensities::default();
    for source in [CarbSource::Oatmeal, CarbSource::Rice, CarbSource::None] {
        assert_eq!(grams_for_carb(0, source, &densities), 0);
    }
    for source in ProteinSource::ALL {
        assert_eq!(grams_for_protein(0, source, &densities.protein), 0);
    }
    assert_eq!(oil_ml_for_fat(0, &densities), 0);
    assert_eq!(eggs_for_protein(0, EggKind::Whole), 0);
}

#[test]
fn test_reference_table_differs_from_generation_table() {
    let config = ProtocolConfig::default();
    assert_eq!(config.reference_densities, ProteinDensities::reference());

    for source in ProteinSource::ALL {
        let generated = grams_for_protein(30, source, &config.generation_densities.protein);
        let suggested = reference_meat_grams(30, source, &config);
        assert!(suggested > generated, "{source}: {suggested} vs {generated}");
    }
    assert_eq!(reference_meat_grams(30, ProteinSource::Shrimp, &config), 161);
}

#[test]
fn test_oil_follows_density() {
    let mut densities = GenerationDensities::default();
    assert_eq!(oil_ml_for_fat(16, &densities), 16);

    densities.olive_oil_fat_per_ml = 0.9;
    assert_eq!(oil_ml_for_fat(18, &densities), 20);
}

#[test]
fn test_egg_macros() {
    let whole = egg_macros(3, EggKind::Whole);
    assert!((whole.protein_g - 18.0).abs() < 1e-9);
    assert!((whole.fat_g - 15.0).abs() < 1e-9);

    let whites = egg_macros(5, EggKind::WhiteOnly);
    assert!((whites.protein_g - 18.0).abs() < 1e-9);
    assert!(whites.fat_g.abs() < 1e-9);

    assert_eq!(eggs_for_protein(20, EggKind::Whole), 3);
    assert_eq!(eggs_for_protein(20, EggKind::WhiteOnly), 6);
}

#[test]
fn test_reference_portions_are_fixed_per_day_type() {
    let low = reference_portions(CarbDayType::Low);
    let medium = reference_portions(CarbDayType::Medium);
    let high = reference_portions(CarbDayType::High);

    assert!(low.oatmeal_g < medium.oatmeal_g && medium.oatmeal_g < high.oatmeal_g);
    assert!(low.lunch_rice_g < high.lunch_rice_g);
    assert_eq!(high.snack_rice_g, 0);
    assert_eq!(high.whole_eggs, 0);
    assert!(high.cardio_minutes.max <= 20);

    for portions in [low, medium, high] {
        assert!(portions.strength_minutes.min <= portions.strength_minutes.max);
        assert!(portions.cardio_minutes.min <= portions.cardio_minutes.max);
    }

    // Same reference every call
    assert!(ptr::eq(low, reference_portions(CarbDayType::Low)));
}
