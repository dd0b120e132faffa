// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for pagination defaults and error code wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single file.

/// Error code wire names
pub mod errors;
/// Pagination defaults and limits
pub mod pagination;

pub use errors::*;
pub use pagination::*;
