// ABOUTME: Core types and constants for the carb-cycling nutrition engine
// ABOUTME: Foundation crate with error handling, protocol constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

#![deny(unsafe_code)]

//! # Carbcycle Core
//!
//! Foundation crate providing shared types and constants for the 112113
//! carb-cycling planner. The engine crate consumes and produces these plain
//! structures; persistence and presentation live outside the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Fixed protocol numbers (cycle pattern, multipliers, energy densities)
//! - **models**: Body profile, nutrition targets, meal plans, exercise and compliance records

/// Unified error handling system with standard error codes
pub mod errors;

/// Protocol constants organized by domain
pub mod constants;

/// Core data models exchanged with storage and presentation layers
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
