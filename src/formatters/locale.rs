// ABOUTME: Bundled locale conventions (separators, grouping, currency placement) and tag resolution
// ABOUTME: Validates BCP 47 syntax and falls back by language, then to en-US
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Locale data
//!
//! A minimal table of regional number conventions. Tags are validated for
//! BCP 47 syntax only; a well-formed tag that is not in the table resolves to
//! the first entry sharing its language, then to `en-US`.

use tracing::debug;

use crate::constants::symbols::NARROW_NO_BREAK_SPACE;
use crate::errors::{FormatError, FormatResult};

/// Digit grouping style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: 1,234,567
    Standard,
    /// Three, then twos: 12,34,567
    Indian,
}

/// Where the currency symbol goes relative to the digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPlacement {
    /// Symbol before the digits, no space unless the symbol ends in a letter
    Prefix,
    /// Symbol before the digits, always separated by a no-break space
    PrefixSpaced,
    /// Symbol after the digits, separated by a no-break space
    Suffix,
}

/// Number conventions for one locale
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleData {
    /// Canonical BCP 47 tag
    pub tag: &'static str,
    /// Decimal separator
    pub decimal: &'static str,
    /// Group separator
    pub group: &'static str,
    /// Grouping style
    pub grouping: Grouping,
    /// Minimum integer digits in the leading group before grouping applies
    pub min_grouping_digits: usize,
    /// Currency symbol placement
    pub currency_placement: CurrencyPlacement,
    /// ISO 4217 code of the locale's own currency
    pub home_currency: &'static str,
    /// Symbol used for the home currency inside this locale
    pub home_symbol: &'static str,
}

impl LocaleData {
    /// Language subtag of the canonical tag
    #[must_use]
    pub fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }
}

/// en-US, also the fallback for unsupported languages
pub const EN_US: LocaleData = LocaleData {
    tag: "en-US",
    decimal: ".",
    group: ",",
    grouping: Grouping::Standard,
    min_grouping_digits: 1,
    currency_placement: CurrencyPlacement::Prefix,
    home_currency: "USD",
    home_symbol: "$",
};

const EN_GB: LocaleData = LocaleData {
    tag: "en-GB",
    home_currency: "GBP",
    home_symbol: "£",
    ..EN_US
};

const EN_CA: LocaleData = LocaleData {
    tag: "en-CA",
    home_currency: "CAD",
    home_symbol: "$",
    ..EN_US
};

const EN_AU: LocaleData = LocaleData {
    tag: "en-AU",
    home_currency: "AUD",
    home_symbol: "$",
    ..EN_US
};

const EN_IN: LocaleData = LocaleData {
    tag: "en-IN",
    grouping: Grouping::Indian,
    home_currency: "INR",
    home_symbol: "₹",
    ..EN_US
};

const DE_DE: LocaleData = LocaleData {
    tag: "de-DE",
    decimal: ",",
    group: ".",
    grouping: Grouping::Standard,
    min_grouping_digits: 1,
    currency_placement: CurrencyPlacement::Suffix,
    home_currency: "EUR",
    home_symbol: "€",
};

const DE_CH: LocaleData = LocaleData {
    tag: "de-CH",
    decimal: ".",
    group: "’",
    currency_placement: CurrencyPlacement::PrefixSpaced,
    home_currency: "CHF",
    home_symbol: "CHF",
    ..DE_DE
};

const FR_FR: LocaleData = LocaleData {
    tag: "fr-FR",
    group: NARROW_NO_BREAK_SPACE,
    ..DE_DE
};

const ES_ES: LocaleData = LocaleData {
    tag: "es-ES",
    min_grouping_digits: 2,
    ..DE_DE
};

const IT_IT: LocaleData = LocaleData {
    tag: "it-IT",
    ..DE_DE
};

const PT_BR: LocaleData = LocaleData {
    tag: "pt-BR",
    currency_placement: CurrencyPlacement::PrefixSpaced,
    home_currency: "BRL",
    home_symbol: "R$",
    ..DE_DE
};

const JA_JP: LocaleData = LocaleData {
    tag: "ja-JP",
    home_currency: "JPY",
    home_symbol: "￥",
    ..EN_US
};

const ZH_CN: LocaleData = LocaleData {
    tag: "zh-CN",
    home_currency: "CNY",
    home_symbol: "¥",
    ..EN_US
};

const KO_KR: LocaleData = LocaleData {
    tag: "ko-KR",
    home_currency: "KRW",
    home_symbol: "₩",
    ..EN_US
};

/// Supported locales; the first entry per language is that language's fallback
pub static LOCALES: &[&LocaleData] = &[
    &EN_US, &EN_GB, &EN_CA, &EN_AU, &EN_IN, &DE_DE, &DE_CH, &FR_FR, &ES_ES, &IT_IT, &PT_BR,
    &JA_JP, &ZH_CN, &KO_KR,
];

/// Resolve a locale tag to its conventions
///
/// # Errors
///
/// Returns `FormatError::InvalidLocale` if the tag is not well-formed BCP 47.
pub fn resolve_locale(tag: &str) -> FormatResult<&'static LocaleData> {
    if !is_well_formed_tag(tag) {
        return Err(FormatError::invalid_locale(tag));
    }

    if let Some(exact) = LOCALES.iter().find(|data| data.tag.eq_ignore_ascii_case(tag)) {
        return Ok(*exact);
    }

    let language = tag.split('-').next().unwrap_or(tag);
    if let Some(by_language) = LOCALES
        .iter()
        .find(|data| data.language().eq_ignore_ascii_case(language))
    {
        debug!(
            locale.requested = %tag,
            locale.resolved = by_language.tag,
            "Locale not bundled, using language fallback"
        );
        return Ok(*by_language);
    }

    debug!(
        locale.requested = %tag,
        locale.resolved = EN_US.tag,
        "Locale language not bundled, using default locale"
    );
    Ok(&EN_US)
}

/// BCP 47 syntax check following the subtag slot order
///
/// `language[-extlang]{0,3}[-script][-region](-variant)*(-singleton(-ext)+)*[-x(-private)+]`.
/// Variants and extension singletons may not repeat.
fn is_well_formed_tag(tag: &str) -> bool {
    let subtags: Vec<&str> = tag.split('-').collect();
    let Some((language, mut rest)) = subtags.split_first() else {
        return false;
    };
    if !(matches!(language.len(), 2..=3 | 5..=8) && is_alpha(language)) {
        return false;
    }

    if language.len() <= 3 {
        for _ in 0..3 {
            rest = skip_if(rest, |subtag| subtag.len() == 3 && is_alpha(subtag));
        }
    }
    rest = skip_if(rest, |subtag| subtag.len() == 4 && is_alpha(subtag));
    rest = skip_if(rest, is_region);

    let mut variants: Vec<&str> = Vec::new();
    while let Some((variant, tail)) = rest.split_first() {
        if !is_variant(variant) {
            break;
        }
        if variants.iter().any(|seen| seen.eq_ignore_ascii_case(variant)) {
            return false;
        }
        variants.push(*variant);
        rest = tail;
    }

    let mut singletons: Vec<char> = Vec::new();
    while let Some((singleton, tail)) = rest.split_first() {
        let mut chars = singleton.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return false;
        };
        if !key.is_ascii_alphanumeric() {
            return false;
        }
        let key = key.to_ascii_lowercase();
        let private_use = key == 'x';
        let min_len = if private_use { 1 } else { 2 };

        let taken = tail
            .iter()
            .take_while(|subtag| (min_len..=8).contains(&subtag.len()) && is_alphanumeric(subtag))
            .count();
        if taken == 0 || singletons.contains(&key) {
            return false;
        }
        rest = &tail[taken..];
        if private_use {
            return rest.is_empty();
        }
        singletons.push(key);
    }
    true
}

/// Drop the first subtag when it fills the optional slot
fn skip_if<'a, 'b>(subtags: &'a [&'b str], fills_slot: fn(&str) -> bool) -> &'a [&'b str] {
    match subtags.split_first() {
        Some((first, tail)) if fills_slot(first) => tail,
        _ => subtags,
    }
}

fn is_alpha(subtag: &str) -> bool {
    subtag.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_alphanumeric(subtag: &str) -> bool {
    subtag.chars().all(|c| c.is_ascii_alphanumeric())
}

fn is_region(subtag: &str) -> bool {
    (subtag.len() == 2 && is_alpha(subtag))
        || (subtag.len() == 3 && subtag.chars().all(|c| c.is_ascii_digit()))
}

fn is_variant(subtag: &str) -> bool {
    if !is_alphanumeric(subtag) {
        return false;
    }
    match subtag.len() {
        5..=8 => true,
        4 => subtag.starts_with(|c: char| c.is_ascii_digit()),
        _ => false,
    }
}
