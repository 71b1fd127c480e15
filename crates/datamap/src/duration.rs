// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Duration expressions such as `300ms`, `1.5h` or `2h45m`.
//!
//! An expression is an optionally signed sequence of decimal numbers, each
//! with an optional fraction and a mandatory unit suffix. Valid units are
//! `ns`, `us` (or `µs`/`μs`), `ms`, `s`, `m` and `h`. A bare `0` is accepted
//! without a unit. Durations are unsigned, so a negative expression is only
//! valid when it evaluates to zero.

use std::time::Duration;
use thiserror::Error;

/// Largest representable magnitude, in nanoseconds.
const MAX_NANOS: u64 = i64::MAX as u64;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} is out of range")]
    Overflow(String),

    #[error("negative duration {0:?} is not supported")]
    Negative(String),
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(3600 * NANOS_PER_SECOND),
        _ => None,
    }
}

fn digit_count(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Consume leading decimal digits. `None` on overflow.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let n = digit_count(s);
    let mut x: u64 = 0;
    for b in s[..n].bytes() {
        x = x.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
        if x > MAX_NANOS {
            return None;
        }
    }
    Some((x, &s[n..]))
}

/// Consume fractional digits, returning the value and its decimal scale.
/// Digits past the representable precision are dropped.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let n = digit_count(s);
    let mut x: u64 = 0;
    let mut scale = 1.0_f64;
    let mut saturated = false;
    for b in s[..n].bytes() {
        if saturated {
            continue;
        }
        match x.checked_mul(10).and_then(|y| y.checked_add(u64::from(b - b'0'))) {
            Some(y) if y <= MAX_NANOS => {
                x = y;
                scale *= 10.0;
            }
            _ => saturated = true,
        }
    }
    (x, scale, &s[n..])
}

/// Parse a duration expression.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let invalid = || DurationParseError::Invalid(input.to_string());
    let overflow = || DurationParseError::Overflow(input.to_string());

    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        let first = s.as_bytes()[0];
        if first != b'.' && !first.is_ascii_digit() {
            return Err(invalid());
        }

        let (whole, rest) = leading_int(s).ok_or_else(overflow)?;
        let has_whole = rest.len() != s.len();
        s = rest;

        let mut frac = 0;
        let mut scale = 1.0;
        let mut has_frac = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (f, sc, after) = leading_fraction(rest);
            has_frac = after.len() != rest.len();
            frac = f;
            scale = sc;
            s = after;
        }
        if !has_whole && !has_frac {
            return Err(invalid());
        }

        let unit_len = s
            .bytes()
            .take_while(|b| *b != b'.' && !b.is_ascii_digit())
            .count();
        if unit_len == 0 {
            return Err(DurationParseError::MissingUnit(input.to_string()));
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;
        let nanos = unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let mut value = whole
            .checked_mul(nanos)
            .filter(|v| *v <= MAX_NANOS)
            .ok_or_else(overflow)?;
        if frac > 0 {
            let extra = (frac as f64 * (nanos as f64 / scale)) as u64;
            value = value
                .checked_add(extra)
                .filter(|v| *v <= MAX_NANOS)
                .ok_or_else(overflow)?;
        }
        total = total
            .checked_add(value)
            .filter(|v| *v <= MAX_NANOS)
            .ok_or_else(overflow)?;
    }

    if negative && total != 0 {
        return Err(DurationParseError::Negative(input.to_string()));
    }

    Ok(Duration::from_nanos(total))
}

/// Render a duration in the expression syntax accepted by [`parse_duration`],
/// e.g. `1h0m0s`, `1m30s`, `1.5s`, `250ms`.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    if nanos < u128::from(NANOS_PER_SECOND) {
        let (unit, scale, digits) = if nanos < 1_000 {
            ("ns", 1, 0)
        } else if nanos < 1_000_000 {
            ("µs", 1_000, 3)
        } else {
            ("ms", 1_000_000, 6)
        };
        return format!("{}{unit}", fixed(nanos / scale, nanos % scale, digits));
    }

    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&fixed(
        u128::from(secs),
        u128::from(d.subsec_nanos()),
        9,
    ));
    out.push('s');
    out
}

fn fixed(whole: u128, frac: u128, digits: usize) -> String {
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:0digits$}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}
