// ABOUTME: Configuration error types for protocol config validation
// ABOUTME: Defines error variants for out-of-range values, non-positive densities, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Configuration error types.

use carbcycle_core::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// A nutrient density that would be used as a divisor is zero, negative or not finite
    #[error("Density {table}.{field} must be positive, got {value}")]
    NonPositiveDensity {
        /// Table holding the entry
        table: &'static str,
        /// Entry name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
