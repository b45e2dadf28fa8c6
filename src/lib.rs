//! Object helpers and a CSS selector builder.
//!
//! This crate re-exports the workspace members:
//!
//! - [`selector`]: order-validating builder for CSS selector strings
//! - [`objects`]: helpers for JSON-like objects, tickets, sorting and grouping
//!
//! Both error types convert into [`Error`], so `?` works across them.
//!
//! ```
//! use object_tasks::{Result, objects, selector};
//! use serde_json::json;
//!
//! fn demo() -> Result<String> {
//!     let letters = json!({"d": [0], "i": [1], "v": [2]});
//!     let tag = objects::make_word(letters.as_object().unwrap())?;
//!     Ok(selector::element(tag)?.class("card")?.stringify())
//! }
//!
//! assert_eq!(demo().unwrap(), "div.card");
//! ```

pub mod error;

pub use error::{Error, Result};
pub use object_utils as objects;
pub use selector_builder as selector;
