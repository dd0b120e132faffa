// ABOUTME: Shared type contracts for paginated collections and API envelopes
// ABOUTME: Foundation crate with error shapes, error codes, pagination, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # App Shared Core
//!
//! Foundation crate providing the data shapes exchanged between services:
//! pagination requests and pages, response envelopes, and the normalized error
//! shape. The types carry no behavior beyond construction helpers, so this
//! crate changes rarely and sits at the bottom of the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError` shape and the `ErrorCode` catalogue with HTTP status mapping
//! - **constants**: Pagination defaults and error code wire names
//! - **pagination**: Page-number pagination request and response types
//! - **response**: Data envelope (`ApiResponse`) and outcome-only (`ApiResult`) shapes

/// Normalized error shape and standard error codes
pub mod errors;

/// Pagination defaults and other shared constants
pub mod constants;

/// Page-number pagination request descriptors and result pages
pub mod pagination;

/// API response envelopes
pub mod response;

pub use errors::{AppError, AppResult, ErrorCode};
pub use pagination::{PaginatedResponse, PaginationParams, SortOrder};
pub use response::{ApiResponse, ApiResult};
