// ABOUTME: Locale-aware currency and number formatting plus the fixed percent template
// ABOUTME: NumberFormatter resolves locale and currency once; free functions wrap it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Number Formatting
//!
//! Locale-aware rendering of currency amounts and plain numbers backed by the
//! bundled tables in [`locale`] and [`currency`], plus a locale-independent
//! percent template.
//!
//! ## Usage
//!
//! ```rust
//! use app_shared::formatters::{format_currency, format_number, format_percent};
//!
//! assert_eq!(format_currency(1999.9, "USD", "en-US").unwrap(), "$1,999.90");
//! assert_eq!(format_number(10_000.0, "en-US").unwrap(), "10,000");
//! assert_eq!(format_percent(0.175, 1), "17.5%");
//! ```

/// Currency table and resolution
pub mod currency;
/// Fraction rounding and digit grouping
mod decimal;
/// Locale table and tag resolution
pub mod locale;

use crate::config::FormatConfig;
use crate::constants::limits::NUMBER_MAX_FRACTION_DIGITS;
use crate::constants::symbols::{INFINITY, MINUS, NAN, NO_BREAK_SPACE, PERCENT};
use crate::errors::FormatResult;
use crate::numeric::round;

use currency::{resolve_currency, ResolvedCurrency};
use decimal::{group_integer, round_digits};
use locale::{resolve_locale, CurrencyPlacement, LocaleData};

/// Formatter bound to one locale and currency
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    locale: &'static LocaleData,
    currency: ResolvedCurrency,
    round_decimals: i32,
    percent_decimals: i32,
}

impl NumberFormatter {
    /// Resolve the configured locale and currency
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidLocale` or `FormatError::InvalidCurrency`
    /// if the configured identifiers are malformed.
    pub fn new(config: &FormatConfig) -> FormatResult<Self> {
        let locale = resolve_locale(&config.locale)?;
        let currency = resolve_currency(&config.currency, locale)?;
        Ok(Self {
            locale,
            currency,
            round_decimals: config.round_decimals,
            percent_decimals: config.percent_decimals,
        })
    }

    /// Build a formatter from `FormatConfig::from_env`
    ///
    /// # Errors
    ///
    /// Returns an error if the environment names a malformed locale or currency.
    pub fn from_env() -> FormatResult<Self> {
        Self::new(&FormatConfig::from_env())
    }

    /// Resolved locale tag
    #[must_use]
    pub const fn locale_tag(&self) -> &'static str {
        self.locale.tag
    }

    /// Upper-cased currency code
    #[must_use]
    pub fn currency_code(&self) -> &str {
        &self.currency.code
    }

    /// Format `value` as an amount of the configured currency
    #[must_use]
    pub fn currency(&self, value: f64) -> String {
        render_currency(value, self.locale, &self.currency)
    }

    /// Format `value` with locale grouping and up to three fraction digits
    #[must_use]
    pub fn number(&self, value: f64) -> String {
        render_number(value, self.locale, 0, NUMBER_MAX_FRACTION_DIGITS)
    }

    /// Format a fraction as a percentage with the configured decimal places
    #[must_use]
    pub fn percent(&self, value: f64) -> String {
        format_percent(value, self.percent_decimals)
    }

    /// Round with the configured decimal places
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        round(value, self.round_decimals)
    }
}

/// Format `value` as a currency amount in `locale`
///
/// Fraction digits follow the currency's minor units (two for USD, none for
/// JPY). Currency codes are case-insensitive.
///
/// # Errors
///
/// Returns `FormatError::InvalidCurrency` if `currency` is not three ASCII
/// letters, or `FormatError::InvalidLocale` if `locale` is not a well-formed
/// BCP 47 tag.
pub fn format_currency(value: f64, currency: &str, locale: &str) -> FormatResult<String> {
    let locale = resolve_locale(locale)?;
    let currency = resolve_currency(currency, locale)?;
    Ok(render_currency(value, locale, &currency))
}

/// Format `value` with the grouping and decimal separator of `locale`
///
/// Up to three fraction digits are kept; trailing zeros are dropped.
///
/// # Errors
///
/// Returns `FormatError::InvalidLocale` if `locale` is not a well-formed BCP 47 tag.
pub fn format_number(value: f64, locale: &str) -> FormatResult<String> {
    let locale = resolve_locale(locale)?;
    Ok(render_number(value, locale, 0, NUMBER_MAX_FRACTION_DIGITS))
}

/// Format a fraction as a percentage: `0.175` becomes `"17.5%"`
///
/// The value is multiplied by 100, rounded with [`round`], and printed
/// without grouping followed by `%`. This is a fixed template, not a
/// locale-aware percent format.
#[must_use]
pub fn format_percent(value: f64, decimals: i32) -> String {
    let percent = round(value * 100.0, decimals);
    format!("{}{PERCENT}", plain_number_text(percent))
}

/// Shortest text of a number, with `-0` printed as `0` and infinities spelled out
fn plain_number_text(value: f64) -> String {
    if value == 0.0 {
        "0".to_owned()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_owned()
        } else {
            "Infinity".to_owned()
        }
    } else {
        value.to_string()
    }
}

/// Digits of `|value|` with locale separators; `NaN` and `∞` for non-finite values
fn render_magnitude(
    value: f64,
    locale: &LocaleData,
    min_fraction: usize,
    max_fraction: usize,
) -> String {
    if value.is_nan() {
        return NAN.to_owned();
    }
    if value.is_infinite() {
        return INFINITY.to_owned();
    }

    let digits = round_digits(value.abs(), min_fraction, max_fraction);
    let integer = group_integer(
        &digits.integer,
        locale.group,
        locale.grouping,
        locale.min_grouping_digits,
    );
    if digits.fraction.is_empty() {
        integer
    } else {
        format!("{integer}{}{}", locale.decimal, digits.fraction)
    }
}

fn sign(value: f64) -> &'static str {
    if !value.is_nan() && value.is_sign_negative() {
        MINUS
    } else {
        ""
    }
}

fn render_number(
    value: f64,
    locale: &LocaleData,
    min_fraction: usize,
    max_fraction: usize,
) -> String {
    let magnitude = render_magnitude(value, locale, min_fraction, max_fraction);
    format!("{}{magnitude}", sign(value))
}

fn render_currency(value: f64, locale: &LocaleData, currency: &ResolvedCurrency) -> String {
    let magnitude = render_magnitude(value, locale, currency.minor_units, currency.minor_units);
    let sign = sign(value);
    let symbol = currency.symbol.as_ref();

    match locale.currency_placement {
        CurrencyPlacement::Prefix if !symbol.ends_with(|c: char| c.is_alphabetic()) => {
            format!("{sign}{symbol}{magnitude}")
        }
        CurrencyPlacement::Prefix | CurrencyPlacement::PrefixSpaced => {
            format!("{sign}{symbol}{NO_BREAK_SPACE}{magnitude}")
        }
        CurrencyPlacement::Suffix => format!("{sign}{magnitude}{NO_BREAK_SPACE}{symbol}"),
    }
}
