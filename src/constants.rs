// ABOUTME: Formatting defaults and environment variable names for the numeric helpers
// ABOUTME: Pure data constants shared by config, formatters, and numeric utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pagination and error constants live in the core crate and are re-exported
//! here as [`shared`].

/// Pagination and error constants from the core crate
pub use app_shared_core::constants as shared;

/// Formatting defaults
pub mod defaults {
    /// Locale used when none is configured
    pub const DEFAULT_LOCALE: &str = "en-US";
    /// Currency used when none is configured
    pub const DEFAULT_CURRENCY: &str = "USD";
    /// Decimal places kept by `round` when none is configured
    pub const DEFAULT_ROUND_DECIMALS: i32 = 2;
    /// Decimal places kept by `format_percent` when none is configured
    pub const DEFAULT_PERCENT_DECIMALS: i32 = 1;
}

/// Limits applied while formatting
pub mod limits {
    /// Maximum fraction digits for plain number formatting
    pub const NUMBER_MAX_FRACTION_DIGITS: usize = 3;
    /// Fraction digits for currencies absent from the currency table
    pub const UNKNOWN_CURRENCY_MINOR_UNITS: usize = 2;
    /// Smallest accepted configured decimal count
    pub const MIN_DECIMALS: i32 = -20;
    /// Largest accepted configured decimal count
    pub const MAX_DECIMALS: i32 = 20;
}

/// Environment variable names read by `FormatConfig::from_env` and `LoggingConfig::from_env`
pub mod env_config {
    /// Locale tag, e.g. `de-DE`
    pub const LOCALE: &str = "APP_SHARED_LOCALE";
    /// ISO 4217 currency code, e.g. `EUR`
    pub const CURRENCY: &str = "APP_SHARED_CURRENCY";
    /// Decimal places for `round`
    pub const ROUND_DECIMALS: &str = "APP_SHARED_ROUND_DECIMALS";
    /// Decimal places for `format_percent`
    pub const PERCENT_DECIMALS: &str = "APP_SHARED_PERCENT_DECIMALS";
    /// Log output format (`pretty`, `json`, `compact`)
    pub const LOG_FORMAT: &str = "APP_SHARED_LOG_FORMAT";
    /// Include source file and line in log output when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// Characters used in formatted output
pub mod symbols {
    /// Separates a suffix currency symbol or an alphabetic prefix symbol from the digits
    pub const NO_BREAK_SPACE: &str = "\u{a0}";
    /// Group separator used by French locales
    pub const NARROW_NO_BREAK_SPACE: &str = "\u{202f}";
    /// Rendering of an infinite value
    pub const INFINITY: &str = "\u{221e}";
    /// Rendering of a NaN value
    pub const NAN: &str = "NaN";
    /// Sign prefix for negative values
    pub const MINUS: &str = "-";
    /// Suffix appended by `format_percent`
    pub const PERCENT: &str = "%";
}
