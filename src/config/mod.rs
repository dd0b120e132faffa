// ABOUTME: Formatting configuration loaded from environment variables
// ABOUTME: Supplies default locale, currency, and decimal places to the formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-only. `FormatConfig::from_env` never fails:
//! unparseable numbers fall back to their defaults. Call
//! `FormatConfig::validate` (or build a `NumberFormatter`) to reject malformed
//! locale tags and currency codes.

use std::env;

use serde::{Deserialize, Serialize};

use crate::constants::defaults::{
    DEFAULT_CURRENCY, DEFAULT_LOCALE, DEFAULT_PERCENT_DECIMALS, DEFAULT_ROUND_DECIMALS,
};
use crate::constants::env_config;
use crate::constants::limits::{MAX_DECIMALS, MIN_DECIMALS};
use crate::errors::{FormatError, FormatResult};
use crate::formatters::currency::resolve_currency;
use crate::formatters::locale::resolve_locale;

/// Defaults applied by `NumberFormatter`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// BCP 47 locale tag
    pub locale: String,
    /// ISO 4217 currency code
    pub currency: String,
    /// Decimal places kept by `round`
    pub round_decimals: i32,
    /// Decimal places kept by `format_percent`
    pub percent_decimals: i32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            currency: DEFAULT_CURRENCY.to_owned(),
            round_decimals: DEFAULT_ROUND_DECIMALS,
            percent_decimals: DEFAULT_PERCENT_DECIMALS,
        }
    }
}

impl FormatConfig {
    /// Load formatting configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            locale: env_var_or(env_config::LOCALE, DEFAULT_LOCALE),
            currency: env_var_or(env_config::CURRENCY, DEFAULT_CURRENCY),
            round_decimals: env::var(env_config::ROUND_DECIMALS)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_ROUND_DECIMALS),
            percent_decimals: env::var(env_config::PERCENT_DECIMALS)
                .ok()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_PERCENT_DECIMALS),
        }
    }

    /// Set the locale
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the currency
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the decimal places for percentages
    #[must_use]
    pub const fn with_percent_decimals(mut self, decimals: i32) -> Self {
        self.percent_decimals = decimals;
        self
    }

    /// Set the decimal places for rounding
    #[must_use]
    pub const fn with_round_decimals(mut self, decimals: i32) -> Self {
        self.round_decimals = decimals;
        self
    }

    /// Check that the locale and currency are well-formed and the decimal counts are in range
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidLocale`, `FormatError::InvalidCurrency`, or
    /// `FormatError::Config` for the first invalid field.
    pub fn validate(&self) -> FormatResult<()> {
        let locale = resolve_locale(&self.locale)?;
        resolve_currency(&self.currency, locale)?;
        check_decimals(env_config::ROUND_DECIMALS, self.round_decimals)?;
        check_decimals(env_config::PERCENT_DECIMALS, self.percent_decimals)
    }
}

fn check_decimals(key: &'static str, decimals: i32) -> FormatResult<()> {
    if (MIN_DECIMALS..=MAX_DECIMALS).contains(&decimals) {
        Ok(())
    } else {
        Err(FormatError::Config {
            key,
            reason: format!("{decimals} is outside {MIN_DECIMALS}..={MAX_DECIMALS}"),
        })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
