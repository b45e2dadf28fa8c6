//! Helpers over JSON-like objects.
//!
//! Objects are [`serde_json::Map`]s with insertion order preserved, so iteration
//! order matches the order keys were first written.

use std::collections::BTreeMap;
use std::ops::Deref;
use std::sync::Arc;

use serde_json::{Map, Number, Value};

use crate::error::{ObjectError, Result};

/// A JSON-like object.
pub type Object = Map<String, Value>;

/// Returns a new object with the same entries.
///
/// Nested values are cloned along with their parent entry; the returned map
/// shares nothing with `obj`.
pub fn shallow_copy(obj: &Object) -> Object {
    obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Merges objects into one, summing values under overlapping keys.
///
/// Numbers are added and strings are concatenated. Any other pair of values under
/// the same key is an error.
///
/// ```
/// use object_utils::merge_objects;
/// use serde_json::json;
///
/// let a = json!({"a": 1, "b": 2});
/// let b = json!({"b": 3, "c": 5});
/// let merged = merge_objects([a.as_object().unwrap(), b.as_object().unwrap()]).unwrap();
/// assert_eq!(serde_json::Value::Object(merged), json!({"a": 1, "b": 5, "c": 5}));
/// ```
pub fn merge_objects<'a>(objects: impl IntoIterator<Item = &'a Object>) -> Result<Object> {
    let mut merged = Object::new();
    for obj in objects {
        for (key, value) in obj {
            match merged.get_mut(key) {
                Some(existing) => *existing = sum_values(key, existing, value)?,
                None => {
                    merged.insert(key.clone(), value.clone());
                }
            }
        }
    }
    Ok(merged)
}

fn sum_values(key: &str, current: &Value, incoming: &Value) -> Result<Value> {
    let cannot_merge = || ObjectError::CannotMerge {
        key: key.to_string(),
    };

    match (current, incoming) {
        (Value::Number(a), Value::Number(b)) => {
            if let Some(sum) = a
                .as_i64()
                .zip(b.as_i64())
                .and_then(|(x, y)| x.checked_add(y))
            {
                return Ok(Value::from(sum));
            }
            let (x, y) = a.as_f64().zip(b.as_f64()).ok_or_else(cannot_merge)?;
            Number::from_f64(x + y)
                .map(Value::Number)
                .ok_or_else(cannot_merge)
        }
        (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
        _ => Err(cannot_merge()),
    }
}

/// Returns a copy of `obj` without the given keys. Keys that are not present are ignored.
pub fn remove_properties<K: AsRef<str>>(obj: &Object, keys: impl IntoIterator<Item = K>) -> Object {
    let keys: Vec<K> = keys.into_iter().collect();
    obj.iter()
        .filter(|(key, _)| !keys.iter().any(|k| k.as_ref() == key.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Structural equality; key order is not significant.
pub fn compare_objects(a: &Object, b: &Object) -> bool {
    a == b
}

pub fn is_empty_object(obj: &Object) -> bool {
    obj.is_empty()
}

/// A shared, read-only handle to a value.
///
/// `Frozen` only hands out shared references, so the wrapped value cannot be
/// changed through it or through any of its clones.
#[derive(Debug, PartialEq)]
pub struct Frozen<T>(Arc<T>);

impl<T> Clone for Frozen<T> {
    fn clone(&self) -> Self {
        Frozen(Arc::clone(&self.0))
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Clone> Frozen<T> {
    /// Returns an independent, mutable copy of the frozen value.
    pub fn thawed(&self) -> T {
        T::clone(&self.0)
    }
}

/// Freezes `value`, preventing any further changes to it.
pub fn make_immutable<T>(value: T) -> Frozen<T> {
    Frozen(Arc::new(value))
}

/// Builds a word from letters and the positions they occupy.
///
/// Each key is a letter and each value an array of positions. When two letters
/// claim the same position the later key wins; unfilled positions are skipped.
///
/// ```
/// use object_utils::make_word;
/// use serde_json::json;
///
/// let letters = json!({"H": [0], "e": [1], "l": [2, 3, 8], "o": [4, 6], "W": [5], "r": [7], "d": [9]});
/// assert_eq!(make_word(letters.as_object().unwrap()).unwrap(), "HelloWorld");
/// ```
pub fn make_word(letters: &Object) -> Result<String> {
    let mut slots: BTreeMap<usize, &str> = BTreeMap::new();

    for (letter, positions) in letters {
        let invalid = || ObjectError::InvalidPositions {
            letter: letter.clone(),
        };
        let positions = positions.as_array().ok_or_else(invalid)?;

        for position in positions {
            let index = position
                .as_u64()
                .and_then(|p| usize::try_from(p).ok())
                .ok_or_else(invalid)?;
            slots.insert(index, letter.as_str());
        }
    }

    Ok(slots.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn merge_mixed_numbers_falls_back_to_float() {
        let merged = merge_objects([&obj(json!({"a": 1})), &obj(json!({"a": 0.5}))]).unwrap();
        assert_eq!(merged["a"], json!(1.5));
    }

    #[test]
    fn merge_overflow_falls_back_to_float() {
        let merged =
            merge_objects([&obj(json!({"a": i64::MAX})), &obj(json!({"a": 1}))]).unwrap();
        assert!(merged["a"].is_f64());
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let source = obj(json!({"z": 1, "y": 2, "x": 3, "w": 4}));
        let result = remove_properties(&source, ["y"]);
        let keys: Vec<_> = result.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "x", "w"]);
    }

    #[test]
    fn word_with_holes_skips_them() {
        let letters = obj(json!({"a": [0], "b": [3]}));
        assert_eq!(make_word(&letters).unwrap(), "ab");
    }
}
