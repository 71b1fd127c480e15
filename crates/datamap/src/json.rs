// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Conversions between data maps and `serde_json` values

use serde_json::Value as J;

use crate::{DataMap, Value};

impl From<J> for Value {
    fn from(json: J) -> Self {
        match json {
            J::Null => Value::Null,
            J::Bool(b) => Value::Bool(b),
            J::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            J::String(s) => Value::String(s),
            J::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            J::Object(obj) => Value::Map(obj.into_iter().collect()),
        }
    }
}

impl From<Value> for J {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => J::Null,
            Value::Bool(b) => J::Bool(b),
            Value::Int(i) => J::from(i),
            // Non-finite floats have no JSON representation
            Value::Float(f) => serde_json::Number::from_f64(f).map_or(J::Null, J::Number),
            Value::String(s) => J::String(s),
            Value::List(items) => J::Array(items.into_iter().map(J::from).collect()),
            Value::Map(map) => J::Object(map.into_iter().map(|(k, v)| (k, J::from(v))).collect()),
        }
    }
}

impl TryFrom<J> for DataMap {
    type Error = J;

    /// Convert a JSON object into a data map. Any other JSON value is handed
    /// back unchanged.
    fn try_from(json: J) -> Result<Self, Self::Error> {
        match json {
            J::Object(obj) => Ok(obj.into_iter().collect()),
            other => Err(other),
        }
    }
}
