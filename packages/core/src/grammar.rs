//! Number grammars shared by index parsing and the numeric converters.
//!
//! Digits are ASCII only: `[0-9]`, not the Unicode `\d` class.

use lazy_static::lazy_static;
use regex::Regex;

/// Optionally signed run of ASCII digits, e.g. `-12`, `+7`, `007`.
pub fn is_whole_number(s: &str) -> bool {
    lazy_static! {
        static ref WHOLE_NUMBER: Regex = Regex::new(r"^[-+]?[0-9]+$").unwrap();
    }
    WHOLE_NUMBER.is_match(s)
}

/// Whole number with an optional `.digits` fraction, e.g. `-1.25`, `3`.
///
/// No exponent, no leading or trailing dot.
pub fn is_decimal_number(s: &str) -> bool {
    lazy_static! {
        static ref DECIMAL_NUMBER: Regex = Regex::new(r"^[-+]?[0-9]+(\.[0-9]+)?$").unwrap();
    }
    DECIMAL_NUMBER.is_match(s)
}
