// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carbcycle Contributors
// ABOUTME: Re-exports helper modules for carbcycle-cli
// ABOUTME: Provides access to JSON input and output utilities

pub mod display;
