//! Conversions into `Value`
//!
//! Native scalars keep their width. Decoded JSON and YAML trees become
//! string-keyed maps and sequences of `Any`, the way a generic decoder
//! would hand them over.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

use super::{
    Callable, Complex, ComplexWidth, FloatWidth, IntWidth, Mapping, Optional, Record, Sequence,
    UintWidth, Value, ValueType,
};

macro_rules! from_scalar {
    ($($ty:ty => $variant:ident($cast:ty, $width:expr)),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v as $cast, $width)
                }
            }
        )*
    };
}

from_scalar! {
    i8 => Int(i64, IntWidth::I8),
    i16 => Int(i64, IntWidth::I16),
    i32 => Int(i64, IntWidth::I32),
    i64 => Int(i64, IntWidth::I64),
    isize => Int(i64, IntWidth::I64),
    u8 => Uint(u64, UintWidth::U8),
    u16 => Uint(u64, UintWidth::U16),
    u32 => Uint(u64, UintWidth::U32),
    u64 => Uint(u64, UintWidth::U64),
    usize => Uint(u64, UintWidth::U64),
    f32 => Float(f64, FloatWidth::F32),
    f64 => Float(f64, FloatWidth::F64),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Complex> for Value {
    fn from(v: Complex) -> Self {
        Value::Complex(v, ComplexWidth::C128)
    }
}

impl From<Sequence> for Value {
    fn from(v: Sequence) -> Self {
        Value::Sequence(v)
    }
}

impl From<Mapping> for Value {
    fn from(v: Mapping) -> Self {
        Value::Map(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Value::Record(Arc::new(v))
    }
}

impl From<Arc<Record>> for Value {
    fn from(v: Arc<Record>) -> Self {
        Value::Record(v)
    }
}

impl From<Optional> for Value {
    fn from(v: Optional) -> Self {
        Value::Optional(v)
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Value::Callable(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(Sequence::infer(items.into_iter().map(Into::into).collect()))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => Value::Optional(Optional::some(inner.into())),
            None => Value::Optional(Optional::none(ValueType::Any)),
        }
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
    S: BuildHasher,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        Value::Map(Mapping::infer(
            map.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        ))
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        Value::Map(Mapping::infer(
            map.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        ))
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i, IntWidth::I64)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u, UintWidth::U64)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN), FloatWidth::F64)
                }
            }
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Sequence(Sequence::untyped(items.iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(fields) => Value::Map(Mapping::object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            )),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from(&json)
    }
}

impl From<&serde_yaml::Value> for Value {
    fn from(yaml: &serde_yaml::Value) -> Self {
        match yaml {
            serde_yaml::Value::Null => Value::Nil,
            serde_yaml::Value::Bool(b) => Value::Bool(*b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i, IntWidth::I64)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u, UintWidth::U64)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN), FloatWidth::F64)
                }
            }
            serde_yaml::Value::String(s) => Value::String(s.clone()),
            serde_yaml::Value::Sequence(items) => {
                Value::Sequence(Sequence::untyped(items.iter().map(Value::from).collect()))
            }
            serde_yaml::Value::Mapping(entries) => {
                let entries: Vec<(Value, Value)> = entries
                    .iter()
                    .map(|(k, v)| (Value::from(k), Value::from(v)))
                    .collect();
                // YAML allows non-string keys; type them only when they agree.
                let key = if entries.iter().all(|(k, _)| matches!(k, Value::String(_))) {
                    ValueType::String
                } else {
                    ValueType::unify(entries.iter().map(|(k, _)| k.value_type()))
                };
                Value::Map(Mapping::new(key, ValueType::Any, entries))
            }
            serde_yaml::Value::Tagged(tagged) => Value::from(&tagged.value),
        }
    }
}

impl From<serde_yaml::Value> for Value {
    fn from(yaml: serde_yaml::Value) -> Self {
        Value::from(&yaml)
    }
}

impl Value {
    /// Render as a `serde_json::Value`
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_widths_are_kept() {
        assert_eq!(Value::from(3_u8).value_type(), ValueType::Uint(UintWidth::U8));
        assert_eq!(Value::from(3_i16).value_type(), ValueType::Int(IntWidth::I16));
        assert_eq!(Value::from(1.5_f32).value_type(), ValueType::Float(FloatWidth::F32));
    }

    #[test]
    fn test_json_objects_are_string_keyed() {
        let value = Value::from(json!({"a": [1, "x"], "b": null}));
        let map = value.as_map().expect("object should convert to a map");
        assert_eq!(map.key_type(), &ValueType::String);
        assert_eq!(map.get_str("a").map(Value::value_type), Some(ValueType::sequence_of(ValueType::Any)));
        assert!(map.get_str("b").is_some_and(Value::is_nil));
    }

    #[test]
    fn test_yaml_integer_keys_are_typed() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\n2: two\n").expect("valid yaml");
        let value = Value::from(yaml);
        let map = value.as_map().expect("mapping should convert to a map");
        assert_eq!(map.key_type(), &ValueType::Int(IntWidth::I64));
    }

    #[test]
    fn test_vec_infers_element_type() {
        let value = Value::from(vec![1_i32, 2, 3]);
        assert_eq!(value.value_type(), ValueType::sequence_of(ValueType::Int(IntWidth::I32)));
    }
}
