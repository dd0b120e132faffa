// ABOUTME: Page-number pagination request descriptors and paginated result pages
// ABOUTME: Defines the JSON shapes list endpoints accept and return
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::constants::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order
    #[default]
    Asc,
    /// Descending order
    Desc,
}

impl SortOrder {
    /// Parse sort order from string (case-insensitive)
    ///
    /// Unrecognized values fall back to ascending.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "desc" | "descending" => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// Get string representation for API responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination request descriptor
///
/// Every field is optional; the paging mechanism that consumes this type
/// decides what an absent field means. The `*_or_default` helpers apply the
/// defaults from [`crate::constants::pagination`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Items per page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Free-text search string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Name of the field to sort by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// Sort direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl PaginationParams {
    /// Create parameters for a specific page and page size
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            search: None,
            sort_by: None,
            sort_order: None,
        }
    }

    /// Set the page number
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the search text
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the sort field and direction
    #[must_use]
    pub fn with_sort(mut self, sort_by: impl Into<String>, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(sort_order);
        self
    }

    /// Requested page, defaulting to the first page; page 0 is treated as page 1
    #[must_use]
    pub fn page_or_default(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE).max(DEFAULT_PAGE)
    }

    /// Requested page size, defaulted and restricted to the accepted range
    #[must_use]
    pub fn page_size_or_default(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
    }

    /// Requested sort direction, defaulting to ascending
    #[must_use]
    pub fn sort_order_or_default(&self) -> SortOrder {
        self.sort_order.unwrap_or_default()
    }

    /// Trimmed search text, `None` when absent or blank
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Number of items to skip to reach the requested page
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page_or_default() - 1) * u64::from(self.page_size_or_default())
    }
}

/// One page of results plus the totals needed to render pagination controls
///
/// Consumers expect `data.len() <= page_size` and `total >= data.len()`; the
/// type does not enforce either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page
    pub data: Vec<T>,

    /// Total number of items across all pages
    pub total: u64,

    /// Current page number
    pub page: u32,

    /// Page size used to produce this page
    pub page_size: u32,
}

impl<T> PaginatedResponse<T> {
    /// Create a new page
    #[must_use]
    pub const fn new(data: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        Self {
            data,
            total,
            page,
            page_size,
        }
    }

    /// Create a page echoing the resolved page and page size of the request
    #[must_use]
    pub fn from_params(data: Vec<T>, total: u64, params: &PaginationParams) -> Self {
        Self::new(
            data,
            total,
            params.page_or_default(),
            params.page_size_or_default(),
        )
    }

    /// Create an empty page
    #[must_use]
    pub const fn empty(page: u32, page_size: u32) -> Self {
        Self::new(Vec::new(), 0, page, page_size)
    }

    /// Number of pages needed to hold `total` items; 0 when the page size is 0
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        let page_size = u64::from(self.page_size);
        if page_size == 0 {
            return 0;
        }
        self.total.div_ceil(page_size)
    }

    /// Whether a page exists after this one
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// Whether a page exists before this one
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// Whether this page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Transform the items while keeping the pagination metadata
    #[must_use]
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
