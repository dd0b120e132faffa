// ABOUTME: Error types for the locale-aware formatters and configuration loading
// ABOUTME: Converts formatting failures into the shared AppError shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Formatting Errors
//!
//! Only the locale-aware formatters can fail, and only because of a malformed
//! locale tag or currency code. These are configuration errors: retrying the
//! same call cannot succeed.

use thiserror::Error;

pub use app_shared_core::errors::{AppError, AppResult, ErrorCode};

/// Errors raised by the formatters and by configuration validation
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The locale is not a well-formed BCP 47 language tag
    #[error("Incorrect locale information provided: '{locale}'")]
    InvalidLocale {
        /// The rejected locale tag
        locale: String,
    },

    /// The currency is not a well-formed ISO 4217 code
    #[error("Invalid currency code: '{currency}'")]
    InvalidCurrency {
        /// The rejected currency code
        currency: String,
    },

    /// A configuration value is outside its accepted range
    #[error("Invalid configuration for {key}: {reason}")]
    Config {
        /// Environment variable or field name
        key: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl FormatError {
    /// Create an invalid locale error
    #[must_use]
    pub fn invalid_locale(locale: impl Into<String>) -> Self {
        Self::InvalidLocale {
            locale: locale.into(),
        }
    }

    /// Create an invalid currency error
    #[must_use]
    pub fn invalid_currency(currency: impl Into<String>) -> Self {
        Self::InvalidCurrency {
            currency: currency.into(),
        }
    }
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::from_code(ErrorCode::ConfigInvalid, error.to_string())
    }
}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
