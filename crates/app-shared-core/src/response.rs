// ABOUTME: Generic API response envelopes for data-returning and outcome-only endpoints
// ABOUTME: ApiResponse wraps a payload, ApiResult reports success or failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Envelope for endpoints that wrap their payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The payload
    pub data: T,
    /// Optional human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload without a message
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    /// Attach a message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Transform the payload, keeping the message
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            data: f(self.data),
            message: self.message,
        }
    }
}

/// Envelope for endpoints that return only success or failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Optional human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResult {
    /// Successful outcome without a message
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Successful outcome with a message
    #[must_use]
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    /// Failed outcome with a message
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

impl From<&AppError> for ApiResult {
    fn from(error: &AppError) -> Self {
        Self::failure(error.message.clone())
    }
}

impl From<AppError> for ApiResult {
    fn from(error: AppError) -> Self {
        Self::failure(error.message)
    }
}
