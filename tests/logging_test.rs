// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment parsing and one-time subscriber installation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use app_shared::constants::env_config;
use app_shared::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_param("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_param(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::from_str_param("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_param("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_param("xml"), LogFormat::Pretty);
}

#[test]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "app_shared=debug");
    env::set_var(env_config::LOG_FORMAT, "json");
    env::set_var(env_config::LOG_INCLUDE_LOCATION, "1");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "app_shared=debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);

    env::remove_var("RUST_LOG");
    env::remove_var(env_config::LOG_FORMAT);
    env::remove_var(env_config::LOG_INCLUDE_LOCATION);
}

#[test]
#[serial]
fn test_logging_config_from_env_defaults() {
    env::remove_var("RUST_LOG");
    env::remove_var(env_config::LOG_FORMAT);
    env::remove_var(env_config::LOG_INCLUDE_LOCATION);

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
}

// The global subscriber can only be installed once per process, so both
// outcomes are checked in a single test.
#[test]
#[serial]
fn test_init_installs_subscriber_once() {
    let config = LoggingConfig {
        level: "not a [valid directive".into(),
        format: LogFormat::Compact,
        include_location: false,
    };

    assert!(config.init().is_ok());

    let error = LoggingConfig::default().init().unwrap_err();
    assert!(error.to_string().starts_with("Failed to initialize logging"));

    // Formatter calls emit debug events through the installed subscriber
    assert!(app_shared::format_number(1.0, "sv-SE").is_ok());
}
