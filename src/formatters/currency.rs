// ABOUTME: Bundled ISO 4217 currency table with minor units and display symbols
// ABOUTME: Resolves a currency code against a locale's home currency symbol
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::borrow::Cow;

use tracing::debug;

use super::locale::LocaleData;
use crate::constants::limits::UNKNOWN_CURRENCY_MINOR_UNITS;
use crate::errors::{FormatError, FormatResult};

/// Static data for one currency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyData {
    /// ISO 4217 alphabetic code
    pub code: &'static str,
    /// Number of fraction digits
    pub minor_units: usize,
    /// Symbol shown outside the currency's home locale
    pub symbol: &'static str,
    /// Country-qualified symbol, used where `symbol` would read as the locale's own currency
    pub qualified_symbol: &'static str,
}

const fn currency(
    code: &'static str,
    minor_units: usize,
    symbol: &'static str,
    qualified_symbol: &'static str,
) -> CurrencyData {
    CurrencyData {
        code,
        minor_units,
        symbol,
        qualified_symbol,
    }
}

/// Bundled currencies
pub static CURRENCIES: &[CurrencyData] = &[
    currency("USD", 2, "$", "US$"),
    currency("EUR", 2, "€", "EUR"),
    currency("GBP", 2, "£", "GB£"),
    currency("JPY", 0, "¥", "JP¥"),
    currency("CNY", 2, "CN¥", "CN¥"),
    currency("CAD", 2, "CA$", "CA$"),
    currency("AUD", 2, "A$", "A$"),
    currency("NZD", 2, "NZ$", "NZ$"),
    currency("HKD", 2, "HK$", "HK$"),
    currency("TWD", 2, "NT$", "NT$"),
    currency("MXN", 2, "MX$", "MX$"),
    currency("BRL", 2, "R$", "R$"),
    currency("INR", 2, "₹", "IN₹"),
    currency("KRW", 0, "₩", "KR₩"),
    currency("ILS", 2, "₪", "IL₪"),
    currency("VND", 0, "₫", "VN₫"),
    currency("CHF", 2, "CHF", "CHF"),
    currency("SEK", 2, "SEK", "SEK"),
    currency("NOK", 2, "NOK", "NOK"),
    currency("DKK", 2, "DKK", "DKK"),
    currency("PLN", 2, "PLN", "PLN"),
    currency("SGD", 2, "SGD", "SGD"),
    currency("ZAR", 2, "ZAR", "ZAR"),
    currency("CLP", 0, "CLP", "CLP"),
    currency("ISK", 0, "ISK", "ISK"),
    currency("BHD", 3, "BHD", "BHD"),
    currency("KWD", 3, "KWD", "KWD"),
];

/// A currency ready for display in a particular locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCurrency {
    /// Upper-cased ISO 4217 code
    pub code: String,
    /// Symbol to print
    pub symbol: Cow<'static, str>,
    /// Number of fraction digits
    pub minor_units: usize,
}

/// Look up a currency code, case-insensitively
#[must_use]
pub fn find_currency(code: &str) -> Option<&'static CurrencyData> {
    CURRENCIES
        .iter()
        .find(|data| data.code.eq_ignore_ascii_case(code))
}

/// Resolve a currency code for display in `locale`
///
/// The locale's own currency uses the locale's symbol. A foreign currency
/// whose symbol matches the locale's own symbol switches to its qualified
/// form (`US$` in en-CA). A well-formed code that is not bundled displays as
/// its code with two fraction digits.
///
/// # Errors
///
/// Returns `FormatError::InvalidCurrency` if `code` is not three ASCII letters.
pub fn resolve_currency(code: &str, locale: &LocaleData) -> FormatResult<ResolvedCurrency> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FormatError::invalid_currency(code));
    }
    let upper = code.to_ascii_uppercase();

    let Some(data) = find_currency(&upper) else {
        debug!(currency.code = %upper, "Currency not bundled, displaying code");
        return Ok(ResolvedCurrency {
            symbol: Cow::Owned(upper.clone()),
            code: upper,
            minor_units: UNKNOWN_CURRENCY_MINOR_UNITS,
        });
    };

    let symbol = if data.code == locale.home_currency {
        locale.home_symbol
    } else if data.symbol == locale.home_symbol {
        data.qualified_symbol
    } else {
        data.symbol
    };

    Ok(ResolvedCurrency {
        code: upper,
        symbol: Cow::Borrowed(symbol),
        minor_units: data.minor_units,
    })
}
