// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference body profiles, dates and seeded random sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `carbcycle`

use std::env;
use std::sync::Once;

use carbcycle::models::{ComplianceRecord, Gender, UserBodyProfile};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 70 kg, 25% body fat, male: the worked example used throughout the docs
pub fn reference_profile() -> UserBodyProfile {
    UserBodyProfile::new(70.0, 0.25, Gender::Male)
}

/// A spread of profiles covering every protein bracket and both water targets
pub fn profile_matrix() -> Vec<UserBodyProfile> {
    let mut profiles = Vec::new();
    for &weight_kg in &[48.5, 62.0, 70.0, 84.9, 85.0, 112.3] {
        for &body_fat_fraction in &[0.08, 0.19, 0.2, 0.25, 0.29, 0.3, 0.42] {
            for gender in [Gender::Male, Gender::Female] {
                profiles.push(UserBodyProfile::new(weight_kg, body_fat_fraction, gender));
            }
        }
    }
    profiles
}

/// Calendar date helper
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Deterministic random source
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A compliance record with every confirmation set to `compliant`
pub fn compliance(date: NaiveDate, compliant: bool) -> ComplianceRecord {
    ComplianceRecord {
        date,
        no_fruit: compliant,
        no_sugar: compliant,
        no_white_flour: compliant,
    }
}
