// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors
// ABOUTME: JSON input and output helpers for carbcycle-cli
// ABOUTME: Pretty-prints results to stdout and reads compliance record files

use std::fs;
use std::path::Path;

use carbcycle::errors::{AppError, AppResult};
use carbcycle::models::ComplianceRecord;
use serde::Serialize;
use tracing::debug;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Read a JSON array of compliance records from a file
pub fn read_compliance_records(path: &Path) -> AppResult<Vec<ComplianceRecord>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
            .with_resource_id(path.display().to_string())
    })?;
    let records: Vec<ComplianceRecord> = serde_json::from_str(&raw)?;
    debug!(count = records.len(), path = %path.display(), "Loaded compliance records");
    Ok(records)
}
