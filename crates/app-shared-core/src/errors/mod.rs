// ABOUTME: Normalized error shape surfaced to API callers and the standard error codes
// ABOUTME: Maps each ErrorCode to an HTTP status and a stable wire name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Shapes
//!
//! `AppError` is the error shape handed to callers: a human-readable message, a
//! numeric status, and an optional machine-readable code. It is constructed at
//! the error site and consumed where the error is displayed or logged.
//!
//! `ErrorCode` is the catalogue of machine-readable codes. Building an
//! `AppError` from a code fills in both the status and the code string so the
//! two never disagree.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::errors::{
    CODE_CONFIG_INVALID, CODE_CONFIG_MISSING, CODE_INTERNAL_ERROR, CODE_INVALID_FORMAT,
    CODE_INVALID_INPUT, CODE_MISSING_REQUIRED_FIELD, CODE_RESOURCE_ALREADY_EXISTS,
    CODE_RESOURCE_NOT_FOUND, CODE_SERIALIZATION_ERROR, CODE_VALUE_OUT_OF_RANGE,
};

/// Standard error codes used across services
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    /// Generic invalid input
    InvalidInput,
    /// A required field is absent
    MissingRequiredField,
    /// A field does not have the expected format
    InvalidFormat,
    /// A value is outside its accepted range
    ValueOutOfRange,

    // Resource Management
    /// The requested resource does not exist
    ResourceNotFound,
    /// A resource with the same identity already exists
    ResourceAlreadyExists,

    // Configuration
    /// Required configuration is absent
    ConfigMissing,
    /// Configuration is present but invalid
    ConfigInvalid,

    // Internal Errors
    /// Unexpected internal failure
    InternalError,
    /// Data could not be serialized or deserialized
    SerializationError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 400,

            Self::ResourceNotFound => 404,

            Self::ResourceAlreadyExists => 409,

            Self::ConfigMissing
            | Self::ConfigInvalid
            | Self::InternalError
            | Self::SerializationError => 500,
        }
    }

    /// Stable wire name, identical to the serde representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => CODE_INVALID_INPUT,
            Self::MissingRequiredField => CODE_MISSING_REQUIRED_FIELD,
            Self::InvalidFormat => CODE_INVALID_FORMAT,
            Self::ValueOutOfRange => CODE_VALUE_OUT_OF_RANGE,
            Self::ResourceNotFound => CODE_RESOURCE_NOT_FOUND,
            Self::ResourceAlreadyExists => CODE_RESOURCE_ALREADY_EXISTS,
            Self::ConfigMissing => CODE_CONFIG_MISSING,
            Self::ConfigInvalid => CODE_CONFIG_INVALID,
            Self::InternalError => CODE_INTERNAL_ERROR,
            Self::SerializationError => CODE_SERIALIZATION_ERROR,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized error shape for surfacing failures to callers
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// Human-readable error message
    pub message: String,
    /// Numeric status code (HTTP semantics)
    pub status: u16,
    /// Optional machine-readable code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl AppError {
    /// Create an error with a status and message and no code
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            code: None,
        }
    }

    /// Create an error from a standard code; status and code string follow the code
    #[must_use]
    pub fn from_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: code.http_status(),
            code: Some(code.as_str().to_owned()),
        }
    }

    /// Attach a machine-readable code
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Machine-readable code, if any
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Status is in the 4xx range
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is in the 5xx range
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::from_code(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Resource already exists
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InternalError, message)
    }

    /// Invalid configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ConfigInvalid, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
