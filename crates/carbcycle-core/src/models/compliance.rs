// ABOUTME: Daily food-restriction compliance records for the first month
// ABOUTME: ComplianceRecord with the three confirmations and the derived StreakStatus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The user's confirmation of the first-month restrictions for one day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplianceRecord {
    /// Calendar date
    pub date: NaiveDate,
    /// Confirmed no fruit
    pub no_fruit: bool,
    /// Confirmed no white sugar
    pub no_sugar: bool,
    /// Confirmed no white flour
    pub no_white_flour: bool,
}

impl ComplianceRecord {
    /// All three restrictions confirmed
    #[must_use]
    pub const fn is_compliant(&self) -> bool {
        self.no_fruit && self.no_sugar && self.no_white_flour
    }
}

/// Whether the streak should be surfaced, and its value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StreakStatus {
    /// Inside the first-month window
    Active {
        /// Consecutive compliant days ending today
        streak: u32,
        /// Current day number in the cycle
        day_number: i64,
    },
    /// Past the first-month window; the streak is hidden
    Inactive,
}
