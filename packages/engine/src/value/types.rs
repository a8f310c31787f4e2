//! Static shape descriptors for dynamic values
//!
//! Every `Value` reports a `ValueType`. Collections carry a declared element
//! (or key/value) type, which is what makes map key coercion and the
//! fan-out unification rule possible.

use std::fmt;

/// Signed integer width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// 8-bit
    I8,
    /// 16-bit
    I16,
    /// 32-bit
    I32,
    /// 64-bit (also used for `isize`)
    I64,
}

/// Unsigned integer width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UintWidth {
    /// 8-bit
    U8,
    /// 16-bit
    U16,
    /// 32-bit
    U32,
    /// 64-bit (also used for `usize`)
    U64,
}

/// Floating-point width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    /// Single precision
    F32,
    /// Double precision
    F64,
}

/// Complex number width (two `f32` or two `f64` components)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexWidth {
    /// Two single-precision components
    C64,
    /// Two double-precision components
    C128,
}

/// Shape descriptor of a value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Untyped slot; accepts every value
    Any,
    /// The nil value
    Nil,
    /// Boolean
    Bool,
    /// Signed integer
    Int(IntWidth),
    /// Unsigned integer
    Uint(UintWidth),
    /// Floating point
    Float(FloatWidth),
    /// Complex number
    Complex(ComplexWidth),
    /// UTF-8 string
    String,
    /// Sequence with a declared element type
    Sequence(Box<ValueType>),
    /// Map with declared key and value types
    Map(Box<ValueType>, Box<ValueType>),
    /// Named record
    Record(String),
    /// Optional (pointer-like) slot
    Optional(Box<ValueType>),
    /// Zero-argument callable
    Callable,
    /// User navigable object
    Navigable,
}

impl ValueType {
    /// Sequence of the given element type
    #[must_use]
    pub fn sequence_of(elem: ValueType) -> Self {
        ValueType::Sequence(Box::new(elem))
    }

    /// Map with the given key and value types
    #[must_use]
    pub fn map_of(key: ValueType, value: ValueType) -> Self {
        ValueType::Map(Box::new(key), Box::new(value))
    }

    /// Optional slot holding the given type
    #[must_use]
    pub fn optional_of(inner: ValueType) -> Self {
        ValueType::Optional(Box::new(inner))
    }

    /// Strip one optional layer
    #[must_use]
    pub fn strip_optional(&self) -> &ValueType {
        match self {
            ValueType::Optional(inner) => inner,
            other => other,
        }
    }

    /// Whether this is one of the numeric types
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ValueType::Int(_) | ValueType::Uint(_) | ValueType::Float(_) | ValueType::Complex(_)
        )
    }

    /// Whether a value of type `other` may be stored in a slot of this type
    ///
    /// Besides identity and `Any`, the accepted widenings are: optional-of
    /// (accepts nil and its inner type), sequence element covariance and map
    /// value covariance under an identical key type.
    #[must_use]
    pub fn is_assignable_from(&self, other: &ValueType) -> bool {
        match (self, other) {
            (a, b) if a == b => true,
            (ValueType::Any, _) => true,
            (ValueType::Optional(_), ValueType::Nil) => true,
            (ValueType::Optional(inner), ValueType::Optional(o)) => inner.is_assignable_from(o),
            (ValueType::Optional(inner), o) => inner.is_assignable_from(o),
            (ValueType::Sequence(e), ValueType::Sequence(o)) => e.is_assignable_from(o),
            (ValueType::Map(k, v), ValueType::Map(ok, ov)) => k == ok && v.is_assignable_from(ov),
            _ => false,
        }
    }

    /// Narrowest type every input is assignable to, `Any` when none exists
    #[must_use]
    pub fn common_supertype(types: &[ValueType]) -> ValueType {
        match types {
            [] => ValueType::Any,
            [only] => only.clone(),
            _ => widening_candidates(types)
                .into_iter()
                .find(|candidate| types.iter().all(|t| candidate.is_assignable_from(t)))
                .unwrap_or(ValueType::Any),
        }
    }

    /// Distinct types of an iterator, in first-seen order, reduced to one
    pub fn unify<I>(types: I) -> ValueType
    where
        I: IntoIterator<Item = ValueType>,
    {
        Self::common_supertype(&distinct(types))
    }
}

/// Distinct types in first-seen order
pub(crate) fn distinct<I>(types: I) -> Vec<ValueType>
where
    I: IntoIterator<Item = ValueType>,
{
    let mut seen = hashbrown::HashSet::new();
    let mut out = Vec::new();
    for ty in types {
        if seen.insert(ty.clone()) {
            out.push(ty);
        }
    }
    out
}

fn push_unique(out: &mut Vec<ValueType>, ty: ValueType) {
    if !out.contains(&ty) {
        out.push(ty);
    }
}

fn widening_candidates(types: &[ValueType]) -> Vec<ValueType> {
    let mut out = Vec::new();
    let non_nil: Vec<&ValueType> = types.iter().filter(|t| **t != ValueType::Nil).collect();

    for ty in &non_nil {
        let base = ty.strip_optional().clone();
        push_unique(&mut out, base.clone());
        push_unique(&mut out, ValueType::optional_of(base));
    }

    if !non_nil.is_empty() {
        let elems: Option<Vec<ValueType>> = non_nil
            .iter()
            .map(|t| match t {
                ValueType::Sequence(e) => Some((**e).clone()),
                _ => None,
            })
            .collect();
        if let Some(elems) = elems {
            let widened = ValueType::sequence_of(ValueType::unify(elems));
            push_unique(&mut out, widened.clone());
            push_unique(&mut out, ValueType::optional_of(widened));
        }

        if let ValueType::Map(key, _) = non_nil[0] {
            let values: Option<Vec<ValueType>> = non_nil
                .iter()
                .map(|t| match t {
                    ValueType::Map(k, v) if k == key => Some((**v).clone()),
                    _ => None,
                })
                .collect();
            if let Some(values) = values {
                let widened = ValueType::map_of((**key).clone(), ValueType::unify(values));
                push_unique(&mut out, widened.clone());
                push_unique(&mut out, ValueType::optional_of(widened));
            }
        }
    }

    out
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Any => f.write_str("any"),
            ValueType::Nil => f.write_str("nil"),
            ValueType::Bool => f.write_str("bool"),
            ValueType::Int(IntWidth::I8) => f.write_str("i8"),
            ValueType::Int(IntWidth::I16) => f.write_str("i16"),
            ValueType::Int(IntWidth::I32) => f.write_str("i32"),
            ValueType::Int(IntWidth::I64) => f.write_str("i64"),
            ValueType::Uint(UintWidth::U8) => f.write_str("u8"),
            ValueType::Uint(UintWidth::U16) => f.write_str("u16"),
            ValueType::Uint(UintWidth::U32) => f.write_str("u32"),
            ValueType::Uint(UintWidth::U64) => f.write_str("u64"),
            ValueType::Float(FloatWidth::F32) => f.write_str("f32"),
            ValueType::Float(FloatWidth::F64) => f.write_str("f64"),
            ValueType::Complex(ComplexWidth::C64) => f.write_str("c64"),
            ValueType::Complex(ComplexWidth::C128) => f.write_str("c128"),
            ValueType::String => f.write_str("string"),
            ValueType::Sequence(elem) => write!(f, "[{elem}]"),
            ValueType::Map(key, value) => write!(f, "map<{key}, {value}>"),
            ValueType::Record(name) => f.write_str(name),
            ValueType::Optional(inner) => write!(f, "Option<{inner}>"),
            ValueType::Callable => f.write_str("fn"),
            ValueType::Navigable => f.write_str("navigable"),
        }
    }
}
