// ABOUTME: Body profile and carb-day classification models
// ABOUTME: UserBodyProfile snapshot, Gender, and the LOW/MEDIUM/HIGH CarbDayType
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::body::MAX_WEIGHT_KG;
use crate::errors::{AppError, AppResult};

/// Gender used for the protein bracket adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female (lower protein multiplier in the highest body-fat bracket)
    Female,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!("Unknown gender: {other}"))),
        }
    }
}

/// Carbohydrate classification of a cycle day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CarbDayType {
    /// Low-carb day (1x lean mass)
    Low,
    /// Medium-carb day (2x lean mass)
    Medium,
    /// High-carb day (3x lean mass)
    High,
}

impl fmt::Display for CarbDayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for CarbDayType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "Unknown carb day type: {other}"
            ))),
        }
    }
}

/// Snapshot of the user's body composition at calculation time
///
/// Owned by the user-management collaborator; the engine never mutates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserBodyProfile {
    /// Total body weight in kilograms
    pub weight_kg: f64,
    /// Body fat as a fraction (0.25 == 25%)
    pub body_fat_fraction: f64,
    /// Gender
    pub gender: Gender,
}

impl UserBodyProfile {
    /// Create a profile without validation
    #[must_use]
    pub const fn new(weight_kg: f64, body_fat_fraction: f64, gender: Gender) -> Self {
        Self {
            weight_kg,
            body_fat_fraction,
            gender,
        }
    }

    /// Create a profile and validate it
    ///
    /// # Errors
    ///
    /// Returns an error if weight is not positive or body fat is outside `0.0..=1.0`
    pub fn validated(weight_kg: f64, body_fat_fraction: f64, gender: Gender) -> AppResult<Self> {
        let profile = Self::new(weight_kg, body_fat_fraction, gender);
        profile.validate()?;
        Ok(profile)
    }

    /// Range-check the profile before it reaches the calculators
    ///
    /// # Errors
    ///
    /// Returns an error if weight is not within `(0, MAX_WEIGHT_KG]` or body
    /// fat is outside `0.0..=1.0`
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 || self.weight_kg > MAX_WEIGHT_KG {
            return Err(
                AppError::out_of_range(format!(
                    "Weight must be a positive number of kilograms up to {MAX_WEIGHT_KG}"
                ))
                .with_details(serde_json::json!({ "weight_kg": self.weight_kg })),
            );
        }
        if !(0.0..=1.0).contains(&self.body_fat_fraction) {
            return Err(
                AppError::out_of_range("Body fat fraction must be between 0.0 and 1.0")
                    .with_details(
                        serde_json::json!({ "body_fat_fraction": self.body_fat_fraction }),
                    ),
            );
        }
        Ok(())
    }
}
