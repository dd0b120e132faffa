// ABOUTME: Integration tests for environment-driven formatting configuration
// ABOUTME: Validates defaults, overrides, fallbacks, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use app_shared::config::FormatConfig;
use app_shared::constants::env_config;
use app_shared::errors::FormatError;
use app_shared::formatters::NumberFormatter;
use serial_test::serial;

fn clear_format_env() {
    for key in [
        env_config::LOCALE,
        env_config::CURRENCY,
        env_config::ROUND_DECIMALS,
        env_config::PERCENT_DECIMALS,
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_format_env();

    let config = FormatConfig::from_env();

    assert_eq!(config, FormatConfig::default());
    assert_eq!(config.locale, "en-US");
    assert_eq!(config.currency, "USD");
    assert_eq!(config.round_decimals, 2);
    assert_eq!(config.percent_decimals, 1);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_format_env();
    env::set_var(env_config::LOCALE, "fr-FR");
    env::set_var(env_config::CURRENCY, "EUR");
    env::set_var(env_config::ROUND_DECIMALS, " 3 ");
    env::set_var(env_config::PERCENT_DECIMALS, "0");

    let config = FormatConfig::from_env();

    assert_eq!(config.locale, "fr-FR");
    assert_eq!(config.currency, "EUR");
    assert_eq!(config.round_decimals, 3);
    assert_eq!(config.percent_decimals, 0);

    let formatter = NumberFormatter::from_env().unwrap();
    assert_eq!(formatter.percent(0.175), "18%");
    assert_eq!(formatter.round(1.2345), 1.235);

    clear_format_env();
}

#[test]
#[serial]
fn test_from_env_unparseable_decimals_fall_back() {
    clear_format_env();
    env::set_var(env_config::ROUND_DECIMALS, "two");
    env::set_var(env_config::PERCENT_DECIMALS, "1.5");

    let config = FormatConfig::from_env();

    assert_eq!(config.round_decimals, 2);
    assert_eq!(config.percent_decimals, 1);

    clear_format_env();
}

#[test]
#[serial]
fn test_from_env_malformed_locale_rejected_by_formatter() {
    clear_format_env();
    env::set_var(env_config::LOCALE, "not a locale");

    let result = NumberFormatter::from_env();
    assert!(matches!(result, Err(FormatError::InvalidLocale { .. })));

    clear_format_env();
}

#[test]
fn test_validate_accepts_defaults() {
    assert!(FormatConfig::default().validate().is_ok());
}

#[test]
fn test_validate_accepts_unbundled_but_well_formed_values() {
    let config = FormatConfig::default()
        .with_locale("sv-SE")
        .with_currency("XYZ");
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_out_of_range_decimals() {
    let config = FormatConfig::default().with_round_decimals(21);
    let error = config.validate().unwrap_err();
    assert!(matches!(
        error,
        FormatError::Config { key, .. } if key == env_config::ROUND_DECIMALS
    ));

    let config = FormatConfig::default().with_percent_decimals(-21);
    let error = config.validate().unwrap_err();
    assert!(matches!(
        error,
        FormatError::Config { key, .. } if key == env_config::PERCENT_DECIMALS
    ));
}

#[test]
fn test_validate_reports_locale_before_currency() {
    let config = FormatConfig::default()
        .with_locale("??")
        .with_currency("??");
    assert!(matches!(
        config.validate(),
        Err(FormatError::InvalidLocale { .. })
    ));
}

#[test]
fn test_config_serde_shape() {
    let config = FormatConfig::default();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "locale": "en-US",
            "currency": "USD",
            "round_decimals": 2,
            "percent_decimals": 1
        })
    );

    let parsed: FormatConfig = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, config);
}
