// ABOUTME: Nutrition commands for carbcycle-cli
// ABOUTME: Macro targets, daily and per-cycle meal plans, and reference portions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

use carbcycle::config::ProtocolConfig;
use carbcycle::errors::AppResult;
use carbcycle::intelligence::{
    compute_targets, generate_cycle_plans, generate_daily_plan, lean_mass_kg,
    reference_meat_grams, reference_portions, ReferencePortions,
};
use carbcycle::models::{CarbDayType, NutritionTargets, ProteinSource, UserBodyProfile};
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use crate::helpers::display::print_json;

#[derive(Serialize)]
struct TargetsReport {
    carb_day_type: CarbDayType,
    lean_mass_kg: f64,
    #[serde(flatten)]
    targets: NutritionTargets,
}

#[derive(Serialize)]
struct MeatSuggestion {
    protein_g: u32,
    source: ProteinSource,
    meat_g: u32,
}

#[derive(Serialize)]
struct ReferenceReport {
    carb_day_type: CarbDayType,
    portions: &'static ReferencePortions,
    #[serde(skip_serializing_if = "Option::is_none")]
    meat_suggestion: Option<MeatSuggestion>,
}

/// Print the day's macro targets
pub fn targets(profile: &UserBodyProfile, day_type: CarbDayType) -> AppResult<()> {
    print_json(&TargetsReport {
        carb_day_type: day_type,
        lean_mass_kg: lean_mass_kg(profile),
        targets: compute_targets(profile, day_type),
    })
}

/// Print a generated plan for one day
pub fn plan<R: Rng>(
    profile: &UserBodyProfile,
    day_type: CarbDayType,
    config: &ProtocolConfig,
    rng: &mut R,
) -> AppResult<()> {
    let plan = generate_daily_plan(profile, day_type, config, rng);
    print_json(&plan)
}

/// Print generated plans for `days` consecutive days from `start`
pub fn cycle_plan<R: Rng>(
    profile: &UserBodyProfile,
    start: NaiveDate,
    days: u32,
    config: &ProtocolConfig,
    rng: &mut R,
) -> AppResult<()> {
    let plans = generate_cycle_plans(profile, start, days, config, rng)?;
    info!(plan.count = plans.len(), "Cycle plans ready");
    print_json(&plans)
}

/// Print the suggested portions, optionally with a meat hint
pub fn reference(
    day_type: CarbDayType,
    meat: Option<(u32, ProteinSource)>,
    config: &ProtocolConfig,
) -> AppResult<()> {
    let meat_suggestion = meat.map(|(protein_g, source)| MeatSuggestion {
        protein_g,
        source,
        meat_g: reference_meat_grams(protein_g, source, config),
    });

    print_json(&ReferenceReport {
        carb_day_type: day_type,
        portions: reference_portions(day_type),
        meat_suggestion,
    })
}
