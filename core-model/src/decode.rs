//! Schema-driven decoding of untyped script input.
//!
//! Script callers hand the bridge plain JSON objects. [`ObjectReader`] wraps
//! such an object and tracks which keys the schema actually looked at, so a
//! decode step can report the keys it ignored instead of dropping them without
//! a trace. A key that exists but holds a value of the wrong JSON type counts
//! as recognized-but-skipped, matching the lenient per-field behavior of the
//! native bridges.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

/// A decoded value together with the input keys the schema did not recognize.
#[derive(Debug, Clone)]
pub struct Decoded<T> {
    pub value: T,
    pub ignored_keys: Vec<String>,
}

/// Tracking reader over an untyped JSON object.
pub struct ObjectReader<'a> {
    map: &'a Map<String, Value>,
    touched: BTreeSet<String>,
}

impl<'a> ObjectReader<'a> {
    /// Wrap `raw`, or return `None` when it is not a JSON object.
    pub fn new(raw: &'a Value) -> Option<ObjectReader<'a>> {
        raw.as_object().map(|map| ObjectReader {
            map,
            touched: BTreeSet::new(),
        })
    }

    fn touch(&mut self, key: &str) -> Option<&'a Value> {
        let value = self.map.get(key)?;
        self.touched.insert(key.to_owned());
        Some(value)
    }

    /// Raw value lookup, marking the key as recognized.
    pub fn opt_value(&mut self, key: &str) -> Option<&'a Value> {
        self.touch(key)
    }

    pub fn opt_str(&mut self, key: &str) -> Option<&'a str> {
        self.touch(key).and_then(Value::as_str)
    }

    pub fn opt_bool(&mut self, key: &str) -> Option<bool> {
        self.touch(key).and_then(Value::as_bool)
    }

    pub fn opt_object(&mut self, key: &str) -> Option<&'a Map<String, Value>> {
        self.touch(key).and_then(Value::as_object)
    }

    pub fn opt_array(&mut self, key: &str) -> Option<&'a Vec<Value>> {
        self.touch(key).and_then(Value::as_array)
    }

    /// Keys present in the input that no lookup recognized, in sorted order.
    pub fn into_ignored(self) -> Vec<String> {
        self.map
            .keys()
            .filter(|key| !self.touched.contains(*key))
            .cloned()
            .collect()
    }
}
