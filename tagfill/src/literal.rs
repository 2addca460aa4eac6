//! Parsers for the annotation literal grammar.
//!
//! Each parser is strict and returns a [`LiteralError`]; the fill rules decide
//! how to degrade.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{LiteralError, LiteralResult};

static SEQUENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.*)\]$").expect("sequence pattern compiles"));

static DURATION_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]*)?|\.[0-9]+)(ns|us|µs|μs|ms|s|m|h)").expect("duration pattern compiles")
});

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(text: &str) -> LiteralResult<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(LiteralError::InvalidBool {
            literal: text.to_string(),
        }),
    }
}

/// Base-10, 64-bit. Narrowing to the field width happens on assignment.
pub fn parse_int(text: &str) -> LiteralResult<i64> {
    text.parse::<i64>().map_err(|source| LiteralError::InvalidInteger {
        literal: text.to_string(),
        source,
    })
}

pub fn parse_uint(text: &str) -> LiteralResult<u64> {
    text.parse::<u64>().map_err(|source| LiteralError::InvalidUnsigned {
        literal: text.to_string(),
        source,
    })
}

pub fn parse_float(text: &str) -> LiteralResult<f64> {
    text.parse::<f64>().map_err(|source| LiteralError::InvalidFloat {
        literal: text.to_string(),
        source,
    })
}

/// Parses a duration such as `1s`, `2m3s`, `1.5h` or `300ms`.
///
/// Units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`; terms may repeat and
/// carry a decimal fraction. A bare `0` is the only unitless literal.
pub fn parse_duration(text: &str) -> LiteralResult<Duration> {
    let invalid = || LiteralError::InvalidDuration {
        literal: text.to_string(),
    };

    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let caps = DURATION_TERM.captures(rest).ok_or_else(invalid)?;
        let scale = match &caps[2] {
            "ns" => 1,
            "us" | "µs" | "μs" => NANOS_PER_MICRO,
            "ms" => NANOS_PER_MILLI,
            "s" => NANOS_PER_SECOND,
            "m" => 60 * NANOS_PER_SECOND,
            "h" => 3_600 * NANOS_PER_SECOND,
            _ => return Err(invalid()),
        };

        let number = &caps[1];
        let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut nanos = whole.checked_mul(scale).ok_or_else(invalid)?;
        if !fraction.is_empty() {
            let fraction: f64 = format!("0.{fraction}").parse().map_err(|_| invalid())?;
            nanos += (fraction * scale as f64) as u128;
        }
        total = total.checked_add(nanos).ok_or_else(invalid)?;

        let consumed = caps[0].len();
        rest = &rest[consumed..];
    }

    if negative && total > 0 {
        return Err(LiteralError::NegativeDuration {
            literal: text.to_string(),
        });
    }
    let nanos = u64::try_from(total).map_err(|_| invalid())?;
    Ok(Duration::from_nanos(nanos))
}

/// Splits a bracket literal into its element literals.
///
/// The interior is split on every comma, without tracking nesting, so
/// `[[1],[2]]` works while `[[1,2],[3]]` does not. `[]` yields no elements.
pub fn split_sequence(text: &str) -> LiteralResult<Vec<&str>> {
    let interior = SEQUENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|interior| interior.as_str())
        .ok_or_else(|| LiteralError::MalformedSequence {
            literal: text.to_string(),
        })?;

    if interior.is_empty() {
        return Ok(Vec::new());
    }
    Ok(interior.split(',').collect())
}
