// ABOUTME: Shared API type contracts and stateless numeric formatting helpers
// ABOUTME: Re-exports the core type crate and adds clamping, rounding, and locale formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # App Shared
//!
//! Two independent units:
//!
//! - **Type contracts** from `app-shared-core`: `PaginationParams`,
//!   `PaginatedResponse`, `AppError`, `ApiResponse`, and `ApiResult`.
//! - **Numeric formatting utilities**: `clamp`, `round`, `format_currency`,
//!   `format_number`, `format_percent`, and `is_numeric`.
//!
//! Nothing here holds state; every function is safe to call from any thread.
//!
//! ```rust
//! use app_shared::{clamp, format_currency, round};
//!
//! assert_eq!(clamp(150, 0, 100), 100);
//! assert_eq!(round(1.005, 2), 1.01);
//! assert_eq!(format_currency(1999.9, "USD", "en-US").unwrap(), "$1,999.90");
//! ```

/// Formatting configuration loaded from the environment
pub mod config;

/// Formatting defaults, limits, and environment variable names
pub mod constants;

/// Formatting errors and the shared `AppError` shape
pub mod errors;

/// Locale-aware currency and number formatting
pub mod formatters;

/// Tracing subscriber setup
pub mod logging;

/// Clamping, rounding, and numeric-string detection
pub mod numeric;

pub use app_shared_core::pagination::{PaginatedResponse, PaginationParams, SortOrder};
pub use app_shared_core::response::{ApiResponse, ApiResult};
pub use app_shared_core::errors::{AppError, AppResult, ErrorCode};

pub use config::FormatConfig;
pub use errors::{FormatError, FormatResult};
pub use formatters::{format_currency, format_number, format_percent, NumberFormatter};
pub use numeric::{clamp, is_numeric, round};
