//! JSON encoding and typed decoding.
//!
//! Decoding into a concrete type gives back a value with that type's methods,
//! e.g. a [`Rectangle`](crate::Rectangle) decoded from `{"width":10,"height":20}`
//! can answer [`area`](crate::Rectangle::area).

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Returns the compact JSON representation of `value`.
pub fn get_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decodes `json` into a value of type `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}
