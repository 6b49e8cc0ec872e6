// ABOUTME: Carbcycle CLI - command-line front end for the carb-cycling planning engine
// ABOUTME: Cycle positions, macro targets, meal plans, exercise guidance and streaks as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Carbcycle CLI
//!
//! Usage:
//! ```bash
//! # Where does today fall in a cycle that started on Jan 1st?
//! carbcycle-cli day --start 2024-01-01 --date 2024-01-07
//!
//! # Macro targets for a high day
//! carbcycle-cli targets --weight-kg 70 --body-fat 0.25 --gender male --day-type high
//!
//! # Reproducible daily plan
//! carbcycle-cli --seed 42 plan --weight-kg 70 --body-fat 0.25 --gender male --day-type low
//!
//! # Plans for every day of a 30-day block
//! carbcycle-cli cycle-plan --weight-kg 70 --body-fat 0.25 --gender female --start 2024-01-01 --days 30
//!
//! # Suggested portions, with a meat hint for 30 g of shrimp protein
//! carbcycle-cli reference --day-type medium --protein-g 30 --source shrimp
//!
//! # Exercise guidance and completion for a logged day
//! carbcycle-cli exercise --day-type high --date 2024-01-06 --strength-done --cardio 15
//!
//! # First-month compliance streak from a JSON file of daily records
//! carbcycle-cli streak --start 2024-01-01 --today 2024-01-09 --records compliance.json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use carbcycle::config::ProtocolConfig;
use carbcycle::logging::LoggingConfig;
use carbcycle::models::{CarbDayType, Gender, ProteinSource, UserBodyProfile};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "carbcycle-cli",
    about = "112113 carb-cycling planner",
    long_about = "Computes cycle positions, macro targets, meal plans, exercise guidance and compliance streaks for the 6-day LOW-LOW-MEDIUM-LOW-LOW-HIGH carb-cycling protocol."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Seed for the protein-source draw (plans are reproducible with the same seed)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Body composition flags shared by the nutrition commands
#[derive(Args)]
struct ProfileArgs {
    /// Body weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Body fat as a fraction (0.25 == 25%)
    #[arg(long)]
    body_fat: f64,

    /// Gender (male/female)
    #[arg(long)]
    gender: Gender,
}

impl ProfileArgs {
    fn profile(&self) -> carbcycle::AppResult<UserBodyProfile> {
        UserBodyProfile::validated(self.weight_kg, self.body_fat, self.gender)
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Position of a date within the cycle
    Day {
        /// First day of the cycle (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Date to look up (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
    },

    /// Daily macro, calorie and water targets
    Targets {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Carb day type (low/medium/high)
        #[arg(long)]
        day_type: CarbDayType,
    },

    /// Generate one day's meal plan
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Carb day type (low/medium/high)
        #[arg(long)]
        day_type: CarbDayType,
    },

    /// Generate meal plans for consecutive days starting at the cycle start
    CyclePlan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// First day of the cycle (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Number of days to generate
        #[arg(long, default_value = "6")]
        days: u32,
    },

    /// Static suggested portions for a carb day
    Reference {
        /// Carb day type (low/medium/high)
        #[arg(long)]
        day_type: CarbDayType,

        /// Protein grams to convert into a meat suggestion
        #[arg(long, requires = "source")]
        protein_g: Option<u32>,

        /// Protein source for the meat suggestion (chicken/beef/shrimp)
        #[arg(long, requires = "protein_g")]
        source: Option<ProteinSource>,
    },

    /// Exercise guidance, plus completion status when a session is logged
    Exercise {
        /// Carb day type (low/medium/high)
        #[arg(long)]
        day_type: CarbDayType,

        /// Strength session was completed
        #[arg(long)]
        strength_done: bool,

        /// Minutes of a completed cardio session (repeatable)
        #[arg(long = "cardio")]
        cardio_minutes: Vec<u32>,

        /// Date of the logged session (required when a session is logged)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// First-month compliance streak
    Streak {
        /// First day of the cycle (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Reference date treated as today (YYYY-MM-DD)
        #[arg(long)]
        today: NaiveDate,

        /// JSON file holding an array of daily compliance records
        #[arg(long)]
        records: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let config = ProtocolConfig::load()?;
    debug!(?config, "Using protocol configuration");

    let mut rng = cli.seed.map_or_else(ChaCha8Rng::from_entropy, |seed| {
        debug!(seed, "Seeding protein-source generator");
        ChaCha8Rng::seed_from_u64(seed)
    });

    match cli.command {
        Command::Day { start, date } => commands::calendar::day(start, date, &config)?,
        Command::Targets { profile, day_type } => {
            commands::nutrition::targets(&profile.profile()?, day_type)?;
        }
        Command::Plan { profile, day_type } => {
            commands::nutrition::plan(&profile.profile()?, day_type, &config, &mut rng)?;
        }
        Command::CyclePlan {
            profile,
            start,
            days,
        } => {
            commands::nutrition::cycle_plan(&profile.profile()?, start, days, &config, &mut rng)?;
        }
        Command::Reference {
            day_type,
            protein_g,
            source,
        } => commands::nutrition::reference(day_type, protein_g.zip(source), &config)?,
        Command::Exercise {
            day_type,
            strength_done,
            cardio_minutes,
            date,
        } => commands::exercise::exercise(day_type, strength_done, &cardio_minutes, date)?,
        Command::Streak {
            start,
            today,
            records,
        } => commands::calendar::streak(start, today, &records, &config)?,
    }

    Ok(())
}
