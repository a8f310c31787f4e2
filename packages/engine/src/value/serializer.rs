//! Build a `Value` from any `Serialize` type
//!
//! Structs become records (every field exported), maps keep the width of
//! their key type, and enum variants carrying data become single-entry maps
//! keyed by the variant name.

use std::fmt::Display;

use serde::ser::{self, Serialize};
use thiserror::Error;

use super::{
    FloatWidth, IntWidth, Mapping, Optional, Record, RecordBuilder, Sequence, UintWidth, Value,
    ValueType,
};

/// Native value could not be converted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert to value: {0}")]
pub struct SerializeError(String);

impl ser::Error for SerializeError {
    fn custom<T: Display>(msg: T) -> Self {
        SerializeError(msg.to_string())
    }
}

/// Convert a native serde type into a `Value`
///
/// # Errors
///
/// Returns `SerializeError` when the type's `Serialize` impl fails, or for
/// 128-bit integers.
///
/// # Examples
/// ```
/// use pathor_engine::value::to_value;
///
/// let value = to_value(&vec![1_u8, 2, 3]).expect("vectors convert");
/// assert_eq!(value.as_sequence().map(|s| s.len()), Some(3));
/// ```
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, SerializeError> {
    value.serialize(ValueSerializer)
}

/// Serializer producing `Value`
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSerializer;

fn single_entry(key: &str, value: Value) -> Value {
    Value::Map(Mapping::infer(vec![(Value::from(key), value)]))
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = SerializeError;
    type SerializeSeq = SeqCollector;
    type SerializeTuple = SeqCollector;
    type SerializeTupleStruct = SeqCollector;
    type SerializeTupleVariant = SeqCollector;
    type SerializeMap = MapCollector;
    type SerializeStruct = RecordCollector;
    type SerializeStructVariant = RecordCollector;

    fn serialize_bool(self, v: bool) -> Result<Value, SerializeError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, SerializeError> {
        Ok(Value::Int(i64::from(v), IntWidth::I8))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, SerializeError> {
        Ok(Value::Int(i64::from(v), IntWidth::I16))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, SerializeError> {
        Ok(Value::Int(i64::from(v), IntWidth::I32))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, SerializeError> {
        Ok(Value::Int(v, IntWidth::I64))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, SerializeError> {
        Ok(Value::Uint(u64::from(v), UintWidth::U8))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, SerializeError> {
        Ok(Value::Uint(u64::from(v), UintWidth::U16))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, SerializeError> {
        Ok(Value::Uint(u64::from(v), UintWidth::U32))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, SerializeError> {
        Ok(Value::Uint(v, UintWidth::U64))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, SerializeError> {
        Ok(Value::Float(f64::from(v), FloatWidth::F32))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, SerializeError> {
        Ok(Value::Float(v, FloatWidth::F64))
    }

    fn serialize_char(self, v: char) -> Result<Value, SerializeError> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, SerializeError> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, SerializeError> {
        Ok(Value::Sequence(Sequence::new(
            ValueType::Uint(UintWidth::U8),
            v.iter().map(|b| Value::Uint(u64::from(*b), UintWidth::U8)).collect(),
        )))
    }

    fn serialize_none(self) -> Result<Value, SerializeError> {
        Ok(Value::Optional(Optional::none(ValueType::Any)))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, SerializeError> {
        Ok(Value::Optional(Optional::some(value.serialize(self)?)))
    }

    fn serialize_unit(self) -> Result<Value, SerializeError> {
        Ok(Value::Nil)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, SerializeError> {
        Ok(Value::Nil)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<Value, SerializeError> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, SerializeError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, SerializeError> {
        Ok(single_entry(variant, value.serialize(self)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqCollector, SerializeError> {
        Ok(SeqCollector {
            variant: None,
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqCollector, SerializeError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqCollector, SerializeError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SeqCollector, SerializeError> {
        Ok(SeqCollector {
            variant: Some(variant),
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapCollector, SerializeError> {
        Ok(MapCollector {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<RecordCollector, SerializeError> {
        Ok(RecordCollector {
            variant: None,
            builder: Record::builder(name),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<RecordCollector, SerializeError> {
        Ok(RecordCollector {
            variant: Some(variant),
            builder: Record::builder(variant),
        })
    }
}

/// Collects sequence, tuple and tuple-variant elements
#[derive(Debug)]
pub struct SeqCollector {
    variant: Option<&'static str>,
    items: Vec<Value>,
}

impl SeqCollector {
    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let seq = Value::Sequence(Sequence::infer(self.items));
        match self.variant {
            Some(variant) => single_entry(variant, seq),
            None => seq,
        }
    }
}

impl ser::SerializeSeq for SeqCollector {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SeqCollector {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SeqCollector {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SeqCollector {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

/// Collects map entries
#[derive(Debug)]
pub struct MapCollector {
    entries: Vec<(Value, Value)>,
    pending_key: Option<Value>,
}

impl ser::SerializeMap for MapCollector {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), SerializeError> {
        self.pending_key = Some(key.serialize(ValueSerializer)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), SerializeError> {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| SerializeError("map value without a key".to_string()))?;
        self.entries.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(Value::Map(Mapping::infer(self.entries)))
    }
}

/// Collects struct and struct-variant fields into a record
#[derive(Debug)]
pub struct RecordCollector {
    variant: Option<&'static str>,
    builder: RecordBuilder,
}

impl RecordCollector {
    fn push<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<(), SerializeError> {
        let value = value.serialize(ValueSerializer)?;
        let builder = std::mem::replace(&mut self.builder, Record::builder(""));
        self.builder = builder.field(key, value);
        Ok(())
    }

    fn finish(self) -> Value {
        let record = Value::from(self.builder.build());
        match self.variant {
            Some(variant) => single_entry(variant, record),
            None => record,
        }
    }
}

impl ser::SerializeStruct for RecordCollector {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), SerializeError> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for RecordCollector {
    type Ok = Value;
    type Error = SerializeError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), SerializeError> {
        self.push(key, value)
    }

    fn end(self) -> Result<Value, SerializeError> {
        Ok(self.finish())
    }
}
