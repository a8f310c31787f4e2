//! Canonical string rendering
//!
//! Used by string concatenation, map key display and `$string`.

use super::{FloatWidth, Value};

/// Canonical text for a value
///
/// Nil renders empty, strings pass through, scalars use their natural
/// display and composites render as compact JSON.
#[must_use]
pub fn canonical_string(value: &Value) -> String {
    let Some(value) = value.deref_value() else {
        return String::new();
    };
    match value {
        Value::Nil => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Int(v, _) => v.to_string(),
        Value::Uint(v, _) => v.to_string(),
        Value::Float(v, FloatWidth::F32) => (*v as f32).to_string(),
        Value::Float(v, FloatWidth::F64) => v.to_string(),
        Value::Complex(c, _) => c.to_string(),
        Value::String(s) => s.clone(),
        Value::Navigable(object) => canonical_string(&object.raw()),
        composite => serde_json::to_string(composite).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Complex, ComplexWidth};

    #[test]
    fn test_scalars() {
        assert_eq!(canonical_string(&Value::Nil), "");
        assert_eq!(canonical_string(&Value::from(2.0_f64)), "2");
        assert_eq!(canonical_string(&Value::from(0.1_f32)), "0.1");
        assert_eq!(
            canonical_string(&Value::Complex(Complex::new(1.0, -2.0), ComplexWidth::C128)),
            "(1-2i)"
        );
    }

    #[test]
    fn test_composites_render_as_json() {
        let seq = Value::from(vec![1, 2]);
        assert_eq!(canonical_string(&seq), "[1,2]");
    }
}
