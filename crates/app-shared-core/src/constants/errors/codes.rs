// ABOUTME: Machine-readable error code names carried in the AppError `code` field
// ABOUTME: Stable SCREAMING_SNAKE_CASE identifiers shared with API clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Error code names
#![allow(missing_docs)]

// Validation
pub const CODE_INVALID_INPUT: &str = "INVALID_INPUT";
pub const CODE_MISSING_REQUIRED_FIELD: &str = "MISSING_REQUIRED_FIELD";
pub const CODE_INVALID_FORMAT: &str = "INVALID_FORMAT";
pub const CODE_VALUE_OUT_OF_RANGE: &str = "VALUE_OUT_OF_RANGE";

// Resources
pub const CODE_RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
pub const CODE_RESOURCE_ALREADY_EXISTS: &str = "RESOURCE_ALREADY_EXISTS";

// Configuration
pub const CODE_CONFIG_MISSING: &str = "CONFIG_MISSING";
pub const CODE_CONFIG_INVALID: &str = "CONFIG_INVALID";

// Internal
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
pub const CODE_SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
