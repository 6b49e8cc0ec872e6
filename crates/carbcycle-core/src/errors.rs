// ABOUTME: Unified error type and error codes shared across the carbcycle workspace
// ABOUTME: AppError carries an ErrorCode, message, structured context and optional source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! # Unified Error Handling
//!
//! The calculators themselves are total functions over validated input, so the
//! error surface is small: boundary validation (body profile, date ordering)
//! and configuration problems. Every fallible public function returns
//! [`AppResult`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was not supplied
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Numeric value outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration present but rejected by validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code a calling API layer should map this error to
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 400,
            Self::ConfigInvalid | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Identifier of the resource involved (cycle id, date, ...)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside an accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ValueOutOfRange.http_status(), 400);
        assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
    }

    #[test]
    fn test_app_error_display_includes_description() {
        let error = AppError::invalid_input("target date precedes cycle start")
            .with_resource_id("2024-01-01");

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.context.resource_id.as_deref(), Some("2024-01-01"));
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: target date precedes cycle start"
        );
    }

    #[test]
    fn test_serde_error_maps_to_serialization_code() {
        let parse_error = serde_json::from_str::<Value>("{").unwrap_err();
        let error = AppError::from(parse_error);

        assert_eq!(error.code, ErrorCode::SerializationError);
        assert_eq!(error.http_status(), 500);
        assert!(error.source.is_some());
    }
}
