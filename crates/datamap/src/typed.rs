// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Typed accessors over [`DataMap::retrieve`].
//!
//! Booleans and integers accept either the native value or a string that
//! parses as one; a string that fails to parse is reported as a parse error.
//! Strings are never produced from other types. Durations must be strings in
//! duration syntax, and a malformed duration is reported as a type mismatch
//! with the parse failure attached as its source.
//!
//! Each accessor has an `_or` variant that returns a default when the path
//! does not exist.

use std::time::Duration;

use crate::duration::parse_duration;
use crate::error::{join_path, Error, Expected, Result};
use crate::parse::parse_bool;
use crate::resolve::or_default;
use crate::{DataMap, Value};

impl DataMap {
    pub fn bool<S: AsRef<str>>(&self, path: &[S]) -> Result<bool> {
        match self.retrieve(path)?.as_value() {
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) => parse_bool(s).map_err(|source| Error::InvalidBoolean {
                path: join_path(path),
                source,
            }),
            _ => Err(Error::bad_type(join_path(path), Expected::Boolean)),
        }
    }

    pub fn bool_or<S: AsRef<str>>(&self, default: bool, path: &[S]) -> Result<bool> {
        or_default(self.bool(path), default)
    }

    pub fn int<S: AsRef<str>>(&self, path: &[S]) -> Result<i64> {
        match self.retrieve(path)?.as_value() {
            Some(Value::Int(n)) => Ok(*n),
            Some(Value::String(s)) => s.parse().map_err(|source| Error::InvalidInteger {
                path: join_path(path),
                source,
            }),
            _ => Err(Error::bad_type(join_path(path), Expected::Integer)),
        }
    }

    pub fn int_or<S: AsRef<str>>(&self, default: i64, path: &[S]) -> Result<i64> {
        or_default(self.int(path), default)
    }

    pub fn string<S: AsRef<str>>(&self, path: &[S]) -> Result<&str> {
        match self.retrieve(path)?.as_value() {
            Some(Value::String(s)) => Ok(s),
            _ => Err(Error::bad_type(join_path(path), Expected::String)),
        }
    }

    pub fn string_or<'a, S: AsRef<str>>(&'a self, default: &'a str, path: &[S]) -> Result<&'a str> {
        or_default(self.string(path), default)
    }

    pub fn duration<S: AsRef<str>>(&self, path: &[S]) -> Result<Duration> {
        match self.retrieve(path)?.as_value() {
            Some(Value::String(s)) => parse_duration(s).map_err(|source| Error::BadType {
                path: join_path(path),
                expected: Expected::Duration,
                source: Some(source),
            }),
            _ => Err(Error::bad_type(join_path(path), Expected::Duration)),
        }
    }

    pub fn duration_or<S: AsRef<str>>(&self, default: Duration, path: &[S]) -> Result<Duration> {
        or_default(self.duration(path), default)
    }
}
