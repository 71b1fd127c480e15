// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for data map lookups

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

use crate::duration::DurationParseError;
use crate::parse::ParseBoolError;

/// Result type alias for data map operations
pub type Result<T> = std::result::Result<T, Error>;

/// The shape a lookup expected to find at a data path
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    DataMap,
    Boolean,
    Integer,
    String,
    Duration,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::DataMap => write!(f, "a data map"),
            Expected::Boolean => write!(f, "a boolean"),
            Expected::Integer => write!(f, "an integer"),
            Expected::String => write!(f, "a string"),
            Expected::Duration => write!(f, "a duration"),
        }
    }
}

/// Coarse classification of an [`Error`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A key does not exist at the expected level of nesting
    NotFound,
    /// A value exists but has the wrong structural or scalar type
    BadType,
    /// A string value could not be parsed into the requested scalar
    Parse,
}

/// Errors produced while resolving a data path
///
/// Every variant carries the slash-joined path at the point of failure.
#[derive(Debug, Error)]
pub enum Error {
    #[error("this data path does not exist: {path}")]
    NotFound { path: String },

    #[error("this data path does not refer to {expected}: {path}")]
    BadType {
        path: String,
        expected: Expected,
        #[source]
        source: Option<DurationParseError>,
    },

    #[error("invalid integer at {path}: {source}")]
    InvalidInteger {
        path: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid boolean at {path}: {source}")]
    InvalidBoolean {
        path: String,
        #[source]
        source: ParseBoolError,
    },

    #[error("extraction failed at {path}: {source}")]
    Extract {
        path: String,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },
}

impl Error {
    pub(crate) fn not_found(path: impl Into<String>) -> Self {
        Error::NotFound { path: path.into() }
    }

    pub(crate) fn bad_type(path: impl Into<String>, expected: Expected) -> Self {
        Error::BadType {
            path: path.into(),
            expected,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::BadType { .. } => ErrorKind::BadType,
            Error::InvalidInteger { .. } | Error::InvalidBoolean { .. } | Error::Extract { .. } => {
                ErrorKind::Parse
            }
        }
    }

    /// Slash-joined data path at which the failure occurred
    pub fn path(&self) -> &str {
        match self {
            Error::NotFound { path }
            | Error::BadType { path, .. }
            | Error::InvalidInteger { path, .. }
            | Error::InvalidBoolean { path, .. }
            | Error::Extract { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Join path segments the way they are reported in errors
pub(crate) fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    segments.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("/")
}
