// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Boolean string parsing

use thiserror::Error;

/// A string that is not one of the accepted boolean spellings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid boolean syntax: {input:?}")]
pub struct ParseBoolError {
    pub input: String,
}

/// Parse a boolean string.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`,
/// `false` and `False`. Anything else, including `yes`/`no`, is rejected.
pub fn parse_bool(s: &str) -> Result<bool, ParseBoolError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError {
            input: s.to_string(),
        }),
    }
}
