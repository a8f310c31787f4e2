//! Dynamic value model
//!
//! `Value` is the closed set of shapes the resolver knows how to navigate:
//! scalars of every width, typed sequences and maps, records with fields and
//! methods, optional and boxed slots, zero-argument callables and user
//! navigable objects.

mod collections;
mod conversions;
mod equality;
mod format;
mod navigable;
mod record;
mod serialize;
pub mod serializer;
mod types;

use std::fmt;
use std::sync::Arc;

pub use collections::{Mapping, Sequence};
pub use equality::deep_equal;
pub use format::canonical_string;
pub use navigable::{Navigable, NavigableError};
pub use record::{CallResult, Callable, Field, Method, Record, RecordBuilder, Returns};
pub use serializer::{SerializeError, to_value};
pub use types::{ComplexWidth, FloatWidth, IntWidth, UintWidth, ValueType};

pub(crate) use types::distinct;

/// Complex number with `f64` components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// Create a complex number
    #[must_use]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "({}{}i)", self.re, self.im)
        } else {
            write!(f, "({}+{}i)", self.re, self.im)
        }
    }
}

/// Optional slot with a declared inner type
#[derive(Debug, Clone)]
pub struct Optional {
    inner: Option<Box<Value>>,
    declared: ValueType,
}

impl Optional {
    /// Occupied slot typed after its content
    #[must_use]
    pub fn some(value: Value) -> Self {
        Self {
            declared: value.value_type(),
            inner: Some(Box::new(value)),
        }
    }

    /// Empty slot of the given type
    #[must_use]
    pub fn none(declared: ValueType) -> Self {
        Self {
            inner: None,
            declared,
        }
    }

    /// Slot with an explicit declared type
    #[must_use]
    pub fn of(declared: ValueType, value: Option<Value>) -> Self {
        Self {
            inner: value.map(Box::new),
            declared,
        }
    }

    /// Content, if any
    #[must_use]
    pub fn get(&self) -> Option<&Value> {
        self.inner.as_deref()
    }

    /// Declared inner type
    #[must_use]
    pub fn declared(&self) -> &ValueType {
        &self.declared
    }
}

/// Dynamically-shaped value
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    Nil,
    /// Boolean
    Bool(bool),
    /// Signed integer with its declared width
    Int(i64, IntWidth),
    /// Unsigned integer with its declared width
    Uint(u64, UintWidth),
    /// Floating point value with its declared width
    Float(f64, FloatWidth),
    /// Complex number with its declared width
    Complex(Complex, ComplexWidth),
    /// UTF-8 string
    String(String),
    /// Typed sequence
    Sequence(Sequence),
    /// Typed map
    Map(Mapping),
    /// Record with fields and methods
    Record(Arc<Record>),
    /// Optional slot
    Optional(Optional),
    /// Boxed (interface-like) slot; transparent to navigation
    Boxed(Box<Value>),
    /// Zero-argument callable
    Callable(Callable),
    /// User navigable object
    Navigable(Arc<dyn Navigable>),
}

impl Value {
    /// Wrap a user navigable object
    pub fn navigable<N: Navigable + 'static>(object: N) -> Self {
        Value::Navigable(Arc::new(object))
    }

    /// Wrap a value in a boxed slot
    #[must_use]
    pub fn boxed(value: Value) -> Self {
        Value::Boxed(Box::new(value))
    }

    /// Shorthand for a 64-bit float
    #[must_use]
    pub fn f64(value: f64) -> Self {
        Value::Float(value, FloatWidth::F64)
    }

    /// Shorthand for a 64-bit signed integer
    #[must_use]
    pub fn i64(value: i64) -> Self {
        Value::Int(value, IntWidth::I64)
    }

    /// Shape descriptor of this value
    ///
    /// Boxed slots report the type of their content.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Nil => ValueType::Nil,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_, w) => ValueType::Int(*w),
            Value::Uint(_, w) => ValueType::Uint(*w),
            Value::Float(_, w) => ValueType::Float(*w),
            Value::Complex(_, w) => ValueType::Complex(*w),
            Value::String(_) => ValueType::String,
            Value::Sequence(seq) => ValueType::sequence_of(seq.elem_type().clone()),
            Value::Map(map) => ValueType::map_of(map.key_type().clone(), map.value_type().clone()),
            Value::Record(record) => ValueType::Record(record.type_name().to_string()),
            Value::Optional(opt) => ValueType::optional_of(opt.declared().clone()),
            Value::Boxed(inner) => inner.value_type(),
            Value::Callable(_) => ValueType::Callable,
            Value::Navigable(_) => ValueType::Navigable,
        }
    }

    /// Strip boxed layers
    #[must_use]
    pub fn unboxed(&self) -> &Value {
        let mut current = self;
        while let Value::Boxed(inner) = current {
            current = inner;
        }
        current
    }

    /// Strip boxed and optional layers; `None` for an empty optional
    #[must_use]
    pub fn deref_value(&self) -> Option<&Value> {
        let mut current = self;
        loop {
            match current {
                Value::Boxed(inner) => current = inner,
                Value::Optional(opt) => current = opt.get()?,
                other => return Some(other),
            }
        }
    }

    /// Nil, or an empty optional
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self.deref_value(), None | Some(Value::Nil))
    }

    /// Whether this is a numeric scalar
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.deref_value(),
            Some(Value::Int(..) | Value::Uint(..) | Value::Float(..) | Value::Complex(..))
        )
    }

    /// Numeric value as `f64`; complex numbers are not converted
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self.deref_value()? {
            Value::Int(v, _) => Some(*v as f64),
            Value::Uint(v, _) => Some(*v as f64),
            Value::Float(v, _) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value as `i64` when it is integral and in range
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self.deref_value()? {
            Value::Int(v, _) => Some(*v),
            Value::Uint(v, _) => i64::try_from(*v).ok(),
            Value::Float(v, _) if v.fract() == 0.0 && v.abs() < 9.2e18 => Some(*v as i64),
            _ => None,
        }
    }

    /// String content
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self.deref_value()? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean content
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.deref_value()? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Sequence content
    #[must_use]
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self.deref_value()? {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// Map content
    #[must_use]
    pub fn as_map(&self) -> Option<&Mapping> {
        match self.deref_value()? {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Record content
    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self.deref_value()? {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("Nil"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Int(v, w) => write!(f, "Int({v}, {w:?})"),
            Value::Uint(v, w) => write!(f, "Uint({v}, {w:?})"),
            Value::Float(v, w) => write!(f, "Float({v}, {w:?})"),
            Value::Complex(c, w) => write!(f, "Complex({c}, {w:?})"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Sequence(seq) => f.debug_list().entries(seq.iter()).finish(),
            Value::Map(map) => f
                .debug_map()
                .entries(map.entries().iter().map(|(k, v)| (k, v)))
                .finish(),
            Value::Record(record) => {
                let mut dbg = f.debug_struct(record.type_name());
                for field in record.fields() {
                    dbg.field(field.name(), field.value());
                }
                dbg.finish()
            }
            Value::Optional(opt) => match opt.get() {
                Some(inner) => write!(f, "Some({inner:?})"),
                None => write!(f, "None::<{}>", opt.declared()),
            },
            Value::Boxed(inner) => write!(f, "Boxed({inner:?})"),
            Value::Callable(callable) => fmt::Debug::fmt(callable, f),
            Value::Navigable(object) => fmt::Debug::fmt(object, f),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonical_string(self))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}
