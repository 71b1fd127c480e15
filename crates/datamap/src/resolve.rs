// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Path resolution through nested data maps

use tracing::trace;

use crate::error::{join_path, Error, Expected, Result};
use crate::{DataMap, Value};

/// What a path resolves to: the map the lookup started from (empty path) or a
/// stored value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Map(&'a DataMap),
    Value(&'a Value),
}

impl<'a> Node<'a> {
    /// The stored value, if the node is not the root map itself
    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            Node::Map(_) => None,
            Node::Value(v) => Some(*v),
        }
    }

    /// The node as a data map, whether it is the root or a nested map value
    pub fn as_map(&self) -> Option<&'a DataMap> {
        match self {
            Node::Map(m) => Some(*m),
            Node::Value(v) => v.as_map(),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Node::Map(m) => Value::Map((*m).clone()),
            Node::Value(v) => (*v).clone(),
        }
    }
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(v: &'a Value) -> Self {
        Node::Value(v)
    }
}

impl<'a> From<&'a DataMap> for Node<'a> {
    fn from(m: &'a DataMap) -> Self {
        Node::Map(m)
    }
}

impl PartialEq<Value> for Node<'_> {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Node::Map(m), Value::Map(o)) => *m == o,
            (Node::Map(_), _) => false,
            (Node::Value(v), o) => *v == o,
        }
    }
}

/// Substitute `default` when `result` failed because the path does not exist.
/// Every other error is passed through.
pub(crate) fn or_default<T>(result: Result<T>, default: T) -> Result<T> {
    match result {
        Err(err) if err.is_not_found() => {
            trace!(path = %err.path(), "data path not found, using default");
            Ok(default)
        }
        other => other,
    }
}

impl DataMap {
    /// Resolve `path` to the value stored there.
    ///
    /// An empty path resolves to `self`. Each non-final segment must name a
    /// nested data map; the final segment must name an existing key.
    pub fn retrieve<S: AsRef<str>>(&self, path: &[S]) -> Result<Node<'_>> {
        let Some((last, parents)) = path.split_last() else {
            return Ok(Node::Map(self));
        };

        let mut current = self;
        for (depth, segment) in parents.iter().enumerate() {
            let traversed = &path[..=depth];
            let value = current.get(segment.as_ref()).ok_or_else(|| {
                trace!(path = %join_path(traversed), "data path lookup failed");
                Error::not_found(join_path(traversed))
            })?;
            current = value
                .as_map()
                .ok_or_else(|| Error::bad_type(join_path(traversed), Expected::DataMap))?;
        }

        current.get(last.as_ref()).map(Node::Value).ok_or_else(|| {
            trace!(path = %join_path(path), "data path lookup failed");
            Error::not_found(join_path(path))
        })
    }

    /// Like [`DataMap::retrieve`], but a missing path yields `default`.
    /// Type mismatches along the path are still reported.
    pub fn retrieve_or<'a, S: AsRef<str>>(
        &'a self,
        default: impl Into<Node<'a>>,
        path: &[S],
    ) -> Result<Node<'a>> {
        or_default(self.retrieve(path), default.into())
    }

    /// Resolve `path` to a nested data map. An empty path yields `self`.
    pub fn map<S: AsRef<str>>(&self, path: &[S]) -> Result<&DataMap> {
        self.retrieve(path)?
            .as_map()
            .ok_or_else(|| Error::bad_type(join_path(path), Expected::DataMap))
    }
}
