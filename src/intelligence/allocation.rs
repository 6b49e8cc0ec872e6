// ABOUTME: Exact-sum allocation of an integer total across a fixed number of buckets
// ABOUTME: Equal rounded shares with the remainder assigned to the last bucket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors

//! Remainder-to-last allocation
//!
//! Every bucket except the last gets `round(total / n)` (half away from zero);
//! the last one takes whatever is left, so the buckets always sum to `total`.
//! If the rounded share would overdraw the total (for example 2 grams across
//! four meals) the share drops to `floor(total / n)`.

/// Split `total` across `buckets` slots so the slots sum exactly to `total`
///
/// Returns an empty vector when `buckets` is zero.
#[must_use]
pub fn split_with_remainder(total: u32, buckets: usize) -> Vec<u32> {
    if buckets == 0 {
        return Vec::new();
    }

    let n = buckets as u64;
    let total_wide = u64::from(total);
    let leading = n - 1;

    // Integer round-half-up of total / n; totals are never negative
    let rounded = (2 * total_wide + n) / (2 * n);
    let share = if rounded * leading > total_wide {
        total_wide / n
    } else {
        rounded
    };
    let remainder = total_wide - share * leading;

    let mut slots = vec![share as u32; buckets];
    if let Some(last) = slots.last_mut() {
        *last = remainder as u32;
    }
    slots
}
