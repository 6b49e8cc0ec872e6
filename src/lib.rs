// ABOUTME: Main library entry point for the carbcycle planning engine
// ABOUTME: Exposes configuration, logging and the 112113 carb-cycling intelligence modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

#![deny(unsafe_code)]

//! # Carbcycle
//!
//! Planning engine for the fixed 6-day "112113" carb-cycling protocol
//! (LOW, LOW, MEDIUM, LOW, LOW, HIGH).
//!
//! Given a body-composition snapshot and a day's position in the cycle, the
//! engine produces macro targets, concrete food portions for four meals,
//! exercise guidance and the first-month compliance streak. Persistence,
//! authentication and presentation belong to the caller.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use carbcycle::config::ProtocolConfig;
//! use carbcycle::intelligence::{cycle_day_position, generate_daily_plan};
//! use carbcycle::models::{Gender, UserBodyProfile};
//! use carbcycle::errors::AppResult;
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! fn main() -> AppResult<()> {
//!     let profile = UserBodyProfile::validated(70.0, 0.25, Gender::Male)?;
//!     let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
//!     let today = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap_or_default();
//!
//!     let position = cycle_day_position(start, today)?;
//!     let mut rng = ChaCha8Rng::seed_from_u64(42);
//!     let plan = generate_daily_plan(
//!         &profile,
//!         position.carb_day_type,
//!         ProtocolConfig::global(),
//!         &mut rng,
//!     );
//!
//!     println!("{} kcal on a {} day", plan.total_calories(), plan.carb_day_type);
//!     Ok(())
//! }
//! ```

/// Protocol configuration: density tables, fat policy, restriction window
pub mod config;

/// Carb-cycling calendar, targets, portions, plans, exercise and streaks
pub mod intelligence;

/// Structured logging setup
pub mod logging;

// Re-export the foundation crate's modules so callers need a single dependency
pub use carbcycle_core::{constants, errors, models};
pub use carbcycle_core::{AppError, AppResult, ErrorCode};
