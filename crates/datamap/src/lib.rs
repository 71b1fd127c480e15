// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Typed, path-based read access over nested configuration data.
//!
//! A [`DataMap`] is a tree of string-keyed mappings whose leaves are dynamic
//! [`Value`]s. It is populated by an external loader (any serde format, or a
//! `serde_json::Value`) and then only read. Lookups take a path of key
//! segments, walk the nested maps left to right, and either return the value
//! found or report where the walk failed:
//!
//! ```rust
//! use datamap::{DataMap, ErrorKind};
//! use std::time::Duration;
//!
//! let map: DataMap = serde_json::from_str(
//!     r#"{"server": {"port": "8080", "timeout": "30s", "tls": true}}"#,
//! )?;
//!
//! assert_eq!(map.int(&["server", "port"])?, 8080);
//! assert_eq!(map.duration(&["server", "timeout"])?, Duration::from_secs(30));
//! assert!(map.bool_or(false, &["server", "tls"])?);
//! assert_eq!(map.string_or("0.0.0.0", &["server", "bind"])?, "0.0.0.0");
//!
//! let err = map.int(&["server", "tls", "port"]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::BadType);
//! assert_eq!(err.path(), "server/tls");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Only missing paths fall back to defaults; type mismatches and malformed
//! scalars are always reported.

pub mod duration;
pub mod error;
mod extract;
mod json;
pub mod map;
pub mod parse;
mod resolve;
mod typed;
pub mod value;

pub use duration::{format_duration, parse_duration, DurationParseError};
pub use error::{Error, ErrorKind, Expected, Result};
pub use map::DataMap;
pub use parse::{parse_bool, ParseBoolError};
pub use resolve::Node;
pub use value::Value;
