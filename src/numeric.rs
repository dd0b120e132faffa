// ABOUTME: Stateless numeric helpers for clamping, decimal rounding, and numeric-string checks
// ABOUTME: Rounding shifts through exponential notation to avoid binary scaling error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Numeric utilities
//!
//! All functions here are pure and never fail.

use std::fmt::Display;

/// Restrict `value` to `[min, max]`
///
/// The value is first raised to `min`, then lowered to `max`. With inverted
/// bounds (`min > max`) the result is therefore `max`; no error is raised.
/// A `NaN` value compares false against both bounds and is returned as is.
///
/// ```
/// use app_shared::numeric::clamp;
///
/// assert_eq!(clamp(150, 0, 100), 100);
/// assert_eq!(clamp(-5.0, 0.0, 100.0), 0.0);
/// ```
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    let raised = if value < min { min } else { value };
    if raised > max {
        max
    } else {
        raised
    }
}

/// Round `value` to `decimals` decimal places
///
/// The decimal point is moved by rewriting the shortest decimal representation
/// with an exponent (`1.005` becomes `1.005e2`, parsed as exactly `100.5`)
/// instead of multiplying, so literals such as `1.005` round the way they read.
/// Ties round toward positive infinity. Negative `decimals` round to tens,
/// hundreds, and so on. Non-finite values are returned unchanged.
///
/// This fixes literal cases like `1.005`; it is not exact decimal arithmetic
/// for every input.
///
/// ```
/// use app_shared::numeric::round;
///
/// assert_eq!(round(1.005, 2), 1.01);
/// assert_eq!(round(1234.5, -2), 1200.0);
/// ```
#[must_use]
pub fn round(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scaled = shift_decimal(value, decimals);
    shift_decimal(round_half_up(scaled), -decimals)
}

/// Move the decimal point of `value` by `exponent` places through its decimal text
fn shift_decimal(value: f64, exponent: i32) -> f64 {
    format!("{value}e{exponent}")
        .parse()
        .unwrap_or_else(|_| value * 10_f64.powi(exponent))
}

/// Nearest integer, ties toward positive infinity
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Whether the string form of `value` is a finite number
///
/// The value is stringified, surrounding whitespace is trimmed, and the whole
/// remainder must be a number literal: decimal or exponent notation with an
/// optional sign, or an unsigned `0x`, `0o`, `0b` integer. This is a coercive
/// check on the text, not a type guard: `true`, `""`, `"12px"`, `"NaN"` and
/// `"Infinity"` are all rejected.
///
/// ```
/// use app_shared::numeric::is_numeric;
///
/// assert!(is_numeric("42"));
/// assert!(is_numeric(&2.5));
/// assert!(!is_numeric("abc"));
/// assert!(!is_numeric(&f64::NAN));
/// ```
#[must_use]
pub fn is_numeric<T: Display + ?Sized>(value: &T) -> bool {
    let text = value.to_string();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    if let Some(parsed) = parse_radix_literal(trimmed) {
        return parsed.is_finite();
    }
    if !is_decimal_literal(trimmed) {
        return false;
    }
    trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Parse `0x`/`0o`/`0b` integer literals; `None` when the prefix is absent or a digit is invalid
fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
    })
}

/// Reject the spellings `f64::from_str` accepts beyond plain number literals (`inf`, `nan`)
fn is_decimal_literal(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_ties() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(0.5 - f64::EPSILON / 4.0), 0.0);
    }

    #[test]
    fn test_shift_decimal_is_exact_for_short_literals() {
        assert_eq!(shift_decimal(1.005, 2), 100.5);
        assert_eq!(shift_decimal(101.0, -2), 1.01);
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(parse_radix_literal("0x1A"), Some(26.0));
        assert_eq!(parse_radix_literal("0b101"), Some(5.0));
        assert_eq!(parse_radix_literal("0o17"), Some(15.0));
        assert_eq!(parse_radix_literal("0x"), None);
        assert_eq!(parse_radix_literal("0xZZ"), None);
        assert_eq!(parse_radix_literal("12"), None);
    }
}
