// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors
// ABOUTME: Re-exports command modules for carbcycle-cli
// ABOUTME: Provides access to calendar, nutrition and exercise commands

pub mod calendar;
pub mod exercise;
pub mod nutrition;
