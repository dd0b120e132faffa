// ABOUTME: Pagination defaults and limits for page-number list endpoints
// ABOUTME: Used when a request omits its page or page size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// First page number; pages are 1-based
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the request does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Smallest accepted page size
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest accepted page size, caps how much a single request can pull
pub const MAX_PAGE_SIZE: u32 = 100;
