// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Typed extraction of whole subtrees

use serde::de::DeserializeOwned;

use crate::error::{join_path, Error, Result};
use crate::DataMap;

impl DataMap {
    /// Deserialize the subtree at `path` into `T`.
    ///
    /// Lookup failures are reported like [`DataMap::retrieve`]. Deserialization
    /// failures are reported as [`Error::Extract`], whose path is the data path
    /// followed by the field path inside the subtree.
    pub fn extract<T: DeserializeOwned, S: AsRef<str>>(&self, path: &[S]) -> Result<T> {
        let json = serde_json::Value::from(self.retrieve(path)?.to_value());
        serde_path_to_error::deserialize(json).map_err(|source| {
            let mut segments: Vec<String> = path.iter().map(|s| s.as_ref().to_string()).collect();
            segments.extend(source.path().iter().map(ToString::to_string));
            Error::Extract {
                path: join_path(&segments),
                source,
            }
        })
    }
}
