//! Free-text coordinate parsing.
//!
//! Two forms are accepted, tried in order:
//! 1. `vector3(x, y, z)` (case-insensitive), as pasted from game scripts
//! 2. any text with at least three numbers separated by commas or whitespace;
//!    an empty token (e.g. from a trailing comma) counts as 0

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static VECTOR3_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)vector3\(\s*([-.0-9]+)\s*,\s*([-.0-9]+)\s*,\s*([-.0-9]+)\s*\)").unwrap()
});

static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,\s]+").unwrap());

/// A world position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Parse `raw` into a coordinate, or `None` if three finite numbers can't
/// be found.
///
/// A `vector3(...)` match is final: if one of its components is not a
/// number the input is rejected rather than re-read as a plain list.
pub fn parse_coordinates(raw: &str) -> Option<Coordinate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let coordinate = match VECTOR3_RE.captures(raw) {
        Some(caps) => Coordinate::new(
            leading_number(&caps[1])?,
            leading_number(&caps[2])?,
            leading_number(&caps[3])?,
        ),
        None => {
            let mut numbers = SEPARATOR_RE
                .split(raw)
                .filter_map(token_number)
                .filter(|n| n.is_finite());
            Coordinate::new(numbers.next()?, numbers.next()?, numbers.next()?)
        }
    };

    coordinate.is_finite().then_some(coordinate)
}

/// Convert a whole token to a number. Empty is 0, and unsigned `0x`, `0o`
/// and `0b` integers are accepted alongside decimal floats.
fn token_number(token: &str) -> Option<f64> {
    if token.is_empty() {
        return Some(0.0);
    }

    let radix = match token.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    match radix {
        Some(radix) => {
            let digits = &token[2..];
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            u128::from_str_radix(digits, radix).ok().map(|n| n as f64)
        }
        None => token.parse::<f64>().ok(),
    }
}

/// Read the longest numeric prefix of a `[-.0-9]+` run: `"1.5.2"` is 1.5,
/// `"3-4"` is 3, `"-"` and `"."` are not numbers.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }
    s[..end].parse().ok()
}
