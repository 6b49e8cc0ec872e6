// ABOUTME: Configuration management for the carb-cycling engine
// ABOUTME: Food density tables, high-day fat policy and restriction window loaded from env
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Configuration module
//!
//! Configuration is environment-only: defaults are compiled in and individual
//! values can be overridden through `CARBCYCLE_*` variables. The protocol
//! itself (the 6-day pattern and macro multipliers) is not configurable and
//! lives in `carbcycle_core::constants`.

/// Configuration error types
pub mod error;
/// Food lookup tables and protocol options
pub mod protocol;

pub use error::ConfigError;
pub use protocol::{GenerationDensities, HighDayFatPolicy, ProteinDensities, ProtocolConfig};
