//! Map lookup with key coercion
//!
//! A path segment is text; the map decides what type its keys have. The
//! segment is parsed into that type before the lookup, so `"3"` finds the
//! entry keyed `3_i32` and `"3.0"` does not.

use crate::error::{PathError, not_found};
use crate::located::{Located, Segment};
use crate::value::{
    Complex, ComplexWidth, FloatWidth, IntWidth, Mapping, UintWidth, Value, ValueType,
};

pub(super) fn resolve(path: &str, map: &Mapping, segment: &Segment) -> Located {
    let text = segment.to_string();
    let next = segment.extend(path);

    let Some(key) = coerce_key(&text, map.key_type()) else {
        return Located::invalid(
            next,
            PathError::BadKey {
                key: text,
                key_type: map.key_type().to_string(),
            },
        );
    };

    match map.get(&key) {
        Some(value) => Located::at(next, value.clone()),
        None => Located::invalid(
            next,
            not_found(text, &ValueType::map_of(map.key_type().clone(), map.value_type().clone())),
        ),
    }
}

/// Parse `text` into a key of type `key_type`
///
/// `None` when the text does not parse, or when the key type gives no way
/// to interpret text at all (`Any`, composites).
pub(crate) fn coerce_key(text: &str, key_type: &ValueType) -> Option<Value> {
    let text = text.trim();
    match key_type.strip_optional() {
        ValueType::String => Some(Value::from(text)),
        ValueType::Bool => text.parse::<bool>().ok().map(Value::Bool),
        ValueType::Int(width) => {
            let parsed = match width {
                IntWidth::I8 => text.parse::<i8>().map(i64::from).ok(),
                IntWidth::I16 => text.parse::<i16>().map(i64::from).ok(),
                IntWidth::I32 => text.parse::<i32>().map(i64::from).ok(),
                IntWidth::I64 => text.parse::<i64>().ok(),
            };
            parsed.map(|v| Value::Int(v, *width))
        }
        ValueType::Uint(width) => {
            let parsed = match width {
                UintWidth::U8 => text.parse::<u8>().map(u64::from).ok(),
                UintWidth::U16 => text.parse::<u16>().map(u64::from).ok(),
                UintWidth::U32 => text.parse::<u32>().map(u64::from).ok(),
                UintWidth::U64 => text.parse::<u64>().ok(),
            };
            parsed.map(|v| Value::Uint(v, *width))
        }
        ValueType::Float(FloatWidth::F32) => text
            .parse::<f32>()
            .ok()
            .map(|v| Value::Float(f64::from(v), FloatWidth::F32)),
        ValueType::Float(FloatWidth::F64) => {
            text.parse::<f64>().ok().map(|v| Value::Float(v, FloatWidth::F64))
        }
        ValueType::Complex(width) => parse_complex(text, *width),
        _ => None,
    }
}

/// Parse `a+bi`, `a-bi`, `bi` or `a`, optionally in parentheses
fn parse_complex(text: &str, width: ComplexWidth) -> Option<Value> {
    let body = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .unwrap_or(text);

    let narrow = |v: f64| match width {
        ComplexWidth::C64 => f64::from(v as f32),
        ComplexWidth::C128 => v,
    };

    let Some(imaginary) = body.strip_suffix('i') else {
        let re: f64 = body.parse().ok()?;
        return Some(Value::Complex(Complex::new(narrow(re), 0.0), width));
    };

    // Split at the last sign that is not the leading sign or an exponent's.
    let bytes = imaginary.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));

    let (re, im) = match split {
        Some(i) => (imaginary[..i].parse::<f64>().ok()?, parse_imaginary(&imaginary[i..])?),
        None => (0.0, parse_imaginary(imaginary)?),
    };
    Some(Value::Complex(Complex::new(narrow(re), narrow(im)), width))
}

fn parse_imaginary(text: &str) -> Option<f64> {
    match text {
        "" | "+" => Some(1.0),
        "-" => Some(-1.0),
        other => other.parse().ok(),
    }
}
