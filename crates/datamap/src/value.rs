// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Dynamic values stored in a [`DataMap`]

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::DataMap;

/// A value slot in a data map.
///
/// Leaves are scalars; `Map` holds a nested data map owned by its parent.
/// `Null`, `Float` and `List` are carried through unchanged but are never
/// coerced by the typed accessors.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(DataMap),
}

impl Value {
    /// Short name of the variant, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "data map",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&DataMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(list: Vec<Value>) -> Self {
        Value::List(list)
    }
}

impl From<DataMap> for Value {
    fn from(map: DataMap) -> Self {
        Value::Map(map)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(list) => list.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
        }
    }
}

/// Key under which `toml` hands a datetime to `deserialize_any`, as the only
/// entry of a map.
const TOML_DATETIME_KEY: &str = "$__toml_private_datetime";

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any data map value")
    }

    fn visit_bool<E>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E>(self, n: i64) -> Result<Value, E> {
        Ok(Value::Int(n))
    }

    fn visit_u64<E>(self, n: u64) -> Result<Value, E> {
        // Integers beyond i64 cannot be represented exactly; keep them as floats.
        Ok(i64::try_from(n).map_or(Value::Float(n as f64), Value::Int))
    }

    fn visit_f64<E>(self, f: f64) -> Result<Value, E> {
        Ok(Value::Float(f))
    }

    fn visit_str<E>(self, s: &str) -> Result<Value, E> {
        Ok(Value::String(s.to_string()))
    }

    fn visit_string<E>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut list = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            list.push(item);
        }
        Ok(Value::List(list))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = DataMap::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        if map.len() == 1 {
            if let Some(Value::String(datetime)) = map.get(TOML_DATETIME_KEY) {
                return Ok(Value::String(datetime.clone()));
            }
        }
        Ok(Value::Map(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Deserialize a data map, rejecting documents whose root is not a mapping.
pub(crate) fn deserialize_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DataMap, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Map(map) => Ok(map),
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(other.type_name()),
            &"a data map",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scalars() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(8080u16), Value::Int(8080));
        assert_eq!(Value::from(-3i32), Value::Int(-3));
        assert_eq!(Value::from("x"), Value::String("x".into()));
        assert_eq!(Value::from(0.5), Value::Float(0.5));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(1).as_bool(), None);
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::String("7".into()).as_int(), None);
        assert_eq!(Value::String("s".into()).as_str(), Some("s"));
        assert!(Value::Map(DataMap::new()).is_map());
        assert!(Value::Null.as_map().is_none());
    }

    #[test]
    fn test_deserialize_json_document() {
        let v: Value = serde_json::from_str(
            r#"{"a": {"b": [1, 2.5, "x", null, true]}, "big": 18446744073709551615}"#,
        )
        .unwrap();
        let map = v.as_map().unwrap();
        let b = map.get("a").and_then(Value::as_map).and_then(|a| a.get("b"));
        assert_eq!(
            b,
            Some(&Value::List(vec![
                Value::Int(1),
                Value::Float(2.5),
                Value::String("x".into()),
                Value::Null,
                Value::Bool(true),
            ]))
        );
        assert!(matches!(map.get("big"), Some(Value::Float(_))));
    }

    #[test]
    fn test_serialize_to_json() {
        let mut inner = DataMap::new();
        inner.insert("port", 8080);
        let mut map = DataMap::new();
        map.insert("server", inner);
        map.insert("debug", false);

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"server": {"port": 8080}, "debug": false})
        );
    }

    #[test]
    fn test_toml_datetime_is_a_string() {
        let v: Value = toml::from_str("at = 1979-05-27T07:32:00Z\nday = 1979-05-27\n").unwrap();
        let map = v.as_map().unwrap();
        assert_eq!(map.get("at"), Some(&Value::from("1979-05-27T07:32:00Z")));
        assert_eq!(map.get("day"), Some(&Value::from("1979-05-27")));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::List(vec![]).type_name(), "list");
        assert_eq!(Value::Map(DataMap::new()).type_name(), "data map");
    }
}
