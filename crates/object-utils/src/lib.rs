//! Small, independent helpers for JSON-like objects and collections.
//!
//! # Overview
//!
//! - [`objects`]: copying, merging, key removal, comparison, freezing and
//!   word reconstruction over [`Object`] maps
//! - [`tickets`]: the change-making ticket queue ([`sell_tickets`], [`BoxOffice`])
//! - [`json`]: [`get_json`] / [`from_json`] for any serde type
//! - [`collections`]: [`sort_cities_array`] and the [`group`] multimap
//!
//! # Usage
//!
//! ```
//! use object_utils::{Rectangle, from_json, get_json, is_empty_object, shallow_copy};
//! use serde_json::json;
//!
//! let source = json!({"a": 2, "b": {"a": [1, 2, 3]}});
//! let copy = shallow_copy(source.as_object().unwrap());
//! assert!(!is_empty_object(&copy));
//!
//! let json = get_json(&Rectangle::new(10.0, 20.0)).unwrap();
//! let rect: Rectangle = from_json(&json).unwrap();
//! assert_eq!(rect.area(), 200.0);
//! ```

pub mod collections;
pub mod error;
pub mod json;
pub mod objects;
pub mod shapes;
pub mod tickets;

// Re-export main types at crate root
pub use collections::{City, Multimap, group, sort_cities_array};
pub use error::{ObjectError, Result};
pub use json::{from_json, get_json};
pub use objects::{
    Frozen, Object, compare_objects, is_empty_object, make_immutable, make_word, merge_objects,
    remove_properties, shallow_copy,
};
pub use shapes::Rectangle;
pub use tickets::{BoxOffice, sell_tickets};
