// ABOUTME: Digit-level helpers for locale formatting: fraction rounding and integer grouping
// ABOUTME: Works on the shortest decimal text of a value so 1.005 rounds to 1.01
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::locale::Grouping;

/// Integer and fraction digits of a non-negative value after rounding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalDigits {
    /// Integer digits, at least one
    pub integer: String,
    /// Fraction digits, possibly empty
    pub fraction: String,
}

/// Round a finite non-negative value to at most `max_fraction` digits, keeping at least `min_fraction`
///
/// Rounding is half away from zero on the shortest decimal representation.
pub fn round_digits(value: f64, min_fraction: usize, max_fraction: usize) -> DecimalDigits {
    let text = format!("{value}");
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = integer.bytes().collect();
    let mut integer_len = digits.len();

    if fraction.len() > max_fraction {
        let (kept, dropped) = fraction.as_bytes().split_at(max_fraction);
        digits.extend_from_slice(kept);
        if dropped.first().is_some_and(|digit| *digit >= b'5') && increment(&mut digits) {
            digits.insert(0, b'1');
            integer_len += 1;
        }
    } else {
        digits.extend_from_slice(fraction.as_bytes());
    }

    let mut fraction_digits = digits.split_off(integer_len);
    while fraction_digits.len() > min_fraction && fraction_digits.last() == Some(&b'0') {
        fraction_digits.pop();
    }
    fraction_digits.resize(fraction_digits.len().max(min_fraction), b'0');

    DecimalDigits {
        integer: String::from_utf8_lossy(&digits).into_owned(),
        fraction: String::from_utf8_lossy(&fraction_digits).into_owned(),
    }
}

/// Add one to the last digit, carrying left; returns true when the carry overflows
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

/// Insert group separators into an integer digit string
///
/// Groups are only inserted when the integer has at least `3 + min_grouping_digits` digits.
pub fn group_integer(
    integer: &str,
    separator: &str,
    grouping: Grouping,
    min_grouping_digits: usize,
) -> String {
    if integer.len() < 3 + min_grouping_digits {
        return integer.to_owned();
    }

    let secondary = match grouping {
        Grouping::Standard => 3,
        Grouping::Indian => 2,
    };

    let mut groups = Vec::new();
    let mut end = integer.len();
    let mut size = 3;
    while end > 0 {
        let start = end.saturating_sub(size);
        groups.push(&integer[start..end]);
        end = start;
        size = secondary;
    }
    groups.reverse();
    groups.join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(value: f64, min: usize, max: usize) -> (String, String) {
        let rounded = round_digits(value, min, max);
        (rounded.integer, rounded.fraction)
    }

    #[test]
    fn test_round_digits_pads_and_trims() {
        assert_eq!(digits(1999.9, 2, 2), ("1999".into(), "90".into()));
        assert_eq!(digits(10_000.0, 0, 3), ("10000".into(), String::new()));
        assert_eq!(digits(0.1, 0, 3), ("0".into(), "1".into()));
    }

    #[test]
    fn test_round_digits_half_away_from_zero() {
        assert_eq!(digits(1.005, 2, 2), ("1".into(), "01".into()));
        assert_eq!(digits(2.5, 0, 0), ("3".into(), String::new()));
        assert_eq!(digits(1.2344, 0, 3), ("1".into(), "234".into()));
    }

    #[test]
    fn test_round_digits_carries_into_integer() {
        assert_eq!(digits(9.9995, 0, 3), ("10".into(), String::new()));
        assert_eq!(digits(999.999, 2, 2), ("1000".into(), "00".into()));
    }

    #[test]
    fn test_group_integer_standard() {
        assert_eq!(group_integer("1", ",", Grouping::Standard, 1), "1");
        assert_eq!(group_integer("1000", ",", Grouping::Standard, 1), "1,000");
        assert_eq!(group_integer("1234567", ",", Grouping::Standard, 1), "1,234,567");
    }

    #[test]
    fn test_group_integer_min_grouping_digits() {
        assert_eq!(group_integer("1000", ".", Grouping::Standard, 2), "1000");
        assert_eq!(group_integer("10000", ".", Grouping::Standard, 2), "10.000");
    }

    #[test]
    fn test_group_integer_indian() {
        assert_eq!(group_integer("1234567", ",", Grouping::Indian, 1), "12,34,567");
        assert_eq!(group_integer("100000", ",", Grouping::Indian, 1), "1,00,000");
    }
}
