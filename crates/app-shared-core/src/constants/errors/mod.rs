// ABOUTME: Error-related constants including machine-readable code names
// ABOUTME: Organizes error handling constants by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error constants module

/// Error code wire names
pub mod codes;

/// Re-export all error code constants
pub use codes::*;
