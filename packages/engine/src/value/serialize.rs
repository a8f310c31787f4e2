//! `Serialize` for values
//!
//! Records serialize as maps of their visible fields. Map keys are rendered
//! through the canonical string form so every map is JSON-representable.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{FloatWidth, Value, canonical_string};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(v, _) => serializer.serialize_i64(*v),
            Value::Uint(v, _) => serializer.serialize_u64(*v),
            Value::Float(v, FloatWidth::F32) => serializer.serialize_f32(*v as f32),
            Value::Float(v, FloatWidth::F64) => serializer.serialize_f64(*v),
            Value::Complex(c, _) => serializer.serialize_str(&c.to_string()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(seq) => {
                let mut out = serializer.serialize_seq(Some(seq.len()))?;
                for item in seq {
                    out.serialize_element(item)?;
                }
                out.end()
            }
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.entries() {
                    out.serialize_entry(&canonical_string(k), v)?;
                }
                out.end()
            }
            Value::Record(record) => {
                let fields = record.visible_fields();
                let mut out = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    out.serialize_entry(name, value)?;
                }
                out.end()
            }
            Value::Optional(opt) => match opt.get() {
                Some(inner) => serializer.serialize_some(inner),
                None => serializer.serialize_none(),
            },
            Value::Boxed(inner) => inner.serialize(serializer),
            Value::Callable(callable) if callable.is_invocable() => match callable.invoke() {
                Ok(result) => result.serialize(serializer),
                Err(_) => serializer.serialize_unit(),
            },
            Value::Callable(_) => serializer.serialize_unit(),
            Value::Navigable(object) => object.raw().serialize(serializer),
        }
    }
}
