//! Typed sequences and maps
//!
//! Both collections share their storage through `Arc`, so cloning a value
//! while navigating never copies elements.

use std::sync::Arc;

use hashbrown::HashMap;

use super::{Value, ValueType, deep_equal};

/// Sequence with a declared element type
#[derive(Debug, Clone)]
pub struct Sequence {
    elem: ValueType,
    items: Arc<Vec<Value>>,
}

impl Sequence {
    /// Sequence with an explicit element type
    #[must_use]
    pub fn new(elem: ValueType, items: Vec<Value>) -> Self {
        Self {
            elem,
            items: Arc::new(items),
        }
    }

    /// Sequence typed by unifying its element types
    #[must_use]
    pub fn infer(items: Vec<Value>) -> Self {
        let elem = if items.is_empty() {
            ValueType::Any
        } else {
            ValueType::unify(items.iter().map(Value::value_type))
        };
        Self::new(elem, items)
    }

    /// Sequence of `Any`
    #[must_use]
    pub fn untyped(items: Vec<Value>) -> Self {
        Self::new(ValueType::Any, items)
    }

    /// Empty sequence of the given element type
    #[must_use]
    pub fn empty(elem: ValueType) -> Self {
        Self::new(elem, Vec::new())
    }

    /// Declared element type
    #[must_use]
    pub fn elem_type(&self) -> &ValueType {
        &self.elem
    }

    /// Elements
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Iterate over elements
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Whether any element is deeply equal to `needle`
    #[must_use]
    pub fn contains(&self, needle: &Value) -> bool {
        self.items.iter().any(|item| deep_equal(item, needle))
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Map with declared key and value types
///
/// Entries keep insertion order. String-keyed maps carry a hash index so
/// lookups by path segment are constant time; when keys repeat the later
/// entry wins.
#[derive(Debug, Clone)]
pub struct Mapping {
    key: ValueType,
    value: ValueType,
    entries: Arc<Vec<(Value, Value)>>,
    index: Option<Arc<HashMap<String, usize>>>,
}

impl Mapping {
    /// Map with explicit key and value types
    #[must_use]
    pub fn new(key: ValueType, value: ValueType, entries: Vec<(Value, Value)>) -> Self {
        let index = (key == ValueType::String).then(|| {
            let mut index = HashMap::with_capacity(entries.len());
            for (pos, (k, _)) in entries.iter().enumerate() {
                if let Some(name) = k.as_str() {
                    index.insert(name.to_string(), pos);
                }
            }
            Arc::new(index)
        });
        Self {
            key,
            value,
            entries: Arc::new(entries),
            index,
        }
    }

    /// Map typed by unifying key and value types
    #[must_use]
    pub fn infer(entries: Vec<(Value, Value)>) -> Self {
        let key = if entries.is_empty() {
            ValueType::String
        } else {
            ValueType::unify(entries.iter().map(|(k, _)| k.value_type()))
        };
        let value = if entries.is_empty() {
            ValueType::Any
        } else {
            ValueType::unify(entries.iter().map(|(_, v)| v.value_type()))
        };
        Self::new(key, value, entries)
    }

    /// String-keyed map with untyped values
    #[must_use]
    pub fn object(entries: Vec<(String, Value)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (Value::String(k), v))
            .collect();
        Self::new(ValueType::String, ValueType::Any, entries)
    }

    /// Declared key type
    #[must_use]
    pub fn key_type(&self) -> &ValueType {
        &self.key
    }

    /// Declared value type
    #[must_use]
    pub fn value_type(&self) -> &ValueType {
        &self.value
    }

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Look up by string key
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        match &self.index {
            Some(index) => index.get(key).map(|&pos| &self.entries[pos].1),
            None => self
                .entries
                .iter()
                .rev()
                .find(|(k, _)| k.as_str() == Some(key))
                .map(|(_, v)| v),
        }
    }

    /// Look up by an already-typed key
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        if let Some(name) = key.as_str() {
            if self.index.is_some() {
                return self.get_str(name);
            }
        }
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| deep_equal(k, key))
            .map(|(_, v)| v)
    }
}
