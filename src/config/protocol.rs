// ABOUTME: Protocol configuration with food density tables and plan-generation options
// ABOUTME: Defaults, CARBCYCLE_* environment overrides, validation, and a global validated instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Protocol Configuration
//!
//! Two protein density tables exist on purpose. The generation table drives
//! whole-day plan generation; the looser reference table drives the
//! "suggested portion" hints. Both are kept so previously generated numbers
//! stay reproducible.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use carbcycle_core::constants::cycle::FIRST_MONTH_DAYS;
use carbcycle_core::models::ProteinSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::ConfigError;

/// Global configuration singleton
static PROTOCOL_CONFIG: OnceLock<ProtocolConfig> = OnceLock::new();

/// Protein grams per 100 g of each protein food
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProteinDensities {
    /// Skinless chicken
    pub chicken_protein_per_100g: f64,
    /// Beef
    pub beef_protein_per_100g: f64,
    /// Shrimp
    pub shrimp_protein_per_100g: f64,
}

impl ProteinDensities {
    /// Table used by whole-day plan generation
    #[must_use]
    pub const fn generation() -> Self {
        Self {
            chicken_protein_per_100g: 31.0,
            beef_protein_per_100g: 26.0,
            shrimp_protein_per_100g: 24.0,
        }
    }

    /// Table used by reference-portion hints
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            chicken_protein_per_100g: 23.0,
            beef_protein_per_100g: 21.0,
            shrimp_protein_per_100g: 18.6,
        }
    }

    /// Protein per 100 g for a source
    #[must_use]
    pub const fn per_100g(&self, source: ProteinSource) -> f64 {
        match source {
            ProteinSource::Chicken => self.chicken_protein_per_100g,
            ProteinSource::Beef => self.beef_protein_per_100g,
            ProteinSource::Shrimp => self.shrimp_protein_per_100g,
        }
    }

    fn validate(&self, table: &'static str) -> Result<(), ConfigError> {
        check_density(table, "chicken_protein_per_100g", self.chicken_protein_per_100g)?;
        check_density(table, "beef_protein_per_100g", self.beef_protein_per_100g)?;
        check_density(table, "shrimp_protein_per_100g", self.shrimp_protein_per_100g)
    }
}

/// Nutrient densities used when generating daily plans
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GenerationDensities {
    /// Carbs per 100 g dry oatmeal
    pub oatmeal_carbs_per_100g: f64,
    /// Carbs per 100 g cooked white rice
    pub rice_carbs_per_100g: f64,
    /// Protein foods
    pub protein: ProteinDensities,
    /// Fat per ml of olive oil
    pub olive_oil_fat_per_ml: f64,
}

impl Default for GenerationDensities {
    fn default() -> Self {
        Self {
            oatmeal_carbs_per_100g: 66.0,
            rice_carbs_per_100g: 28.0,
            protein: ProteinDensities::generation(),
            olive_oil_fat_per_ml: 1.0,
        }
    }
}

impl GenerationDensities {
    fn validate(&self) -> Result<(), ConfigError> {
        const TABLE: &str = "generation_densities";
        check_density(TABLE, "oatmeal_carbs_per_100g", self.oatmeal_carbs_per_100g)?;
        check_density(TABLE, "rice_carbs_per_100g", self.rice_carbs_per_100g)?;
        check_density(TABLE, "olive_oil_fat_per_ml", self.olive_oil_fat_per_ml)?;
        self.protein.validate(TABLE)
    }
}

/// How plan generation treats fat on high-carb days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HighDayFatPolicy {
    /// Use the macro calculator's value, `round(lean_mass * 0.3)`
    #[default]
    LeanMassScaled,
    /// Force fat to zero on high days (matches plans stored by the older generator)
    Zero,
}

impl fmt::Display for HighDayFatPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeanMassScaled => write!(f, "lean_mass_scaled"),
            Self::Zero => write!(f, "zero"),
        }
    }
}

impl FromStr for HighDayFatPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lean_mass_scaled" => Ok(Self::LeanMassScaled),
            "zero" => Ok(Self::Zero),
            other => Err(ConfigError::Parse(format!(
                "Unknown high day fat policy: {other}"
            ))),
        }
    }
}

/// Protocol configuration container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProtocolConfig {
    /// Densities for daily plan generation
    pub generation_densities: GenerationDensities,
    /// Protein densities for reference-portion hints
    pub reference_densities: ProteinDensities,
    /// Fat handling on high days during plan generation
    pub high_day_fat_policy: HighDayFatPolicy,
    /// Number of days from cycle start during which restrictions and the streak apply
    pub restriction_window_days: i64,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            generation_densities: GenerationDensities::default(),
            reference_densities: ProteinDensities::reference(),
            high_day_fat_policy: HighDayFatPolicy::default(),
            restriction_window_days: FIRST_MONTH_DAYS,
        }
    }
}

impl ProtocolConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PROTOCOL_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load protocol config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            high_day_fat_policy = %config.high_day_fat_policy,
            restriction_window_days = config.restriction_window_days,
            "Protocol configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NonPositiveDensity` for any density that would be
    /// used as a divisor and is not positive, and `ValueOutOfRange` for a
    /// restriction window shorter than one day
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generation_densities.validate()?;
        self.reference_densities.validate("reference_densities")?;

        if self.restriction_window_days < 1 {
            return Err(ConfigError::ValueOutOfRange(
                "restriction_window_days must be at least 1",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let densities = &mut self.generation_densities;
        Self::apply_env_var(
            "CARBCYCLE_OATMEAL_CARBS_PER_100G",
            &mut densities.oatmeal_carbs_per_100g,
        )?;
        Self::apply_env_var(
            "CARBCYCLE_RICE_CARBS_PER_100G",
            &mut densities.rice_carbs_per_100g,
        )?;
        Self::apply_env_var(
            "CARBCYCLE_CHICKEN_PROTEIN_PER_100G",
            &mut densities.protein.chicken_protein_per_100g,
        )?;
        Self::apply_env_var(
            "CARBCYCLE_BEEF_PROTEIN_PER_100G",
            &mut densities.protein.beef_protein_per_100g,
        )?;
        Self::apply_env_var(
            "CARBCYCLE_SHRIMP_PROTEIN_PER_100G",
            &mut densities.protein.shrimp_protein_per_100g,
        )?;
        Self::apply_env_var(
            "CARBCYCLE_OLIVE_OIL_FAT_PER_ML",
            &mut densities.olive_oil_fat_per_ml,
        )?;

        if let Ok(val) = env::var("CARBCYCLE_HIGH_DAY_FAT_POLICY") {
            self.high_day_fat_policy = val.parse()?;
        }
        Self::apply_env_var(
            "CARBCYCLE_RESTRICTION_WINDOW_DAYS",
            &mut self.restriction_window_days,
        )?;

        Ok(self)
    }
}

fn check_density(table: &'static str, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveDensity {
            table,
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProtocolConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.restriction_window_days, 30);
        assert_eq!(config.high_day_fat_policy, HighDayFatPolicy::LeanMassScaled);
    }

    #[test]
    fn test_generation_and_reference_tables_stay_distinct() {
        let config = ProtocolConfig::default();
        let generation = config.generation_densities.protein;
        let reference = config.reference_densities;

        assert!((generation.per_100g(ProteinSource::Chicken) - 31.0).abs() < f64::EPSILON);
        assert!((reference.per_100g(ProteinSource::Chicken) - 23.0).abs() < f64::EPSILON);
        assert!((reference.per_100g(ProteinSource::Shrimp) - 18.6).abs() < f64::EPSILON);
        assert_ne!(generation, reference);
    }

    #[test]
    fn test_zero_density_rejected() {
        let mut config = ProtocolConfig::default();
        config.generation_densities.rice_carbs_per_100g = 0.0;

        match config.validate() {
            Err(ConfigError::NonPositiveDensity { table, field, .. }) => {
                assert_eq!(table, "generation_densities");
                assert_eq!(field, "rice_carbs_per_100g");
            }
            other => panic!("expected NonPositiveDensity, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_reference_density_rejected() {
        let mut config = ProtocolConfig::default();
        config.reference_densities.beef_protein_per_100g = -21.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDensity {
                table: "reference_densities",
                ..
            })
        ));
    }

    #[test]
    fn test_fat_policy_parsing() {
        assert_eq!("zero".parse::<HighDayFatPolicy>().unwrap(), HighDayFatPolicy::Zero);
        assert!("none".parse::<HighDayFatPolicy>().is_err());
    }
}
