//! # selector-builder
//!
//! A fluent, order-validating builder for CSS selector strings.
//!
//! A compound selector is made of up to six kinds of parts that must appear in a fixed order:
//!
//! ```text
//! element#id.class[attr]:pseudoClass::pseudoElement
//!           \----/\----/\----------/
//!           may occur several times
//! ```
//!
//! Element, id and pseudo-element may occur only once. Every builder step returns a new
//! [`Selector`] (or a [`SelectorError`]), and [`combine`] joins finished selectors with one of
//! the combinators `' '`, `'+'`, `'~'`, `'>'` into a terminal [`ComplexSelector`].
//!
//! ## Quick Start
//!
//! ```rust
//! use selector_builder::{Combinator, combine, element, id};
//!
//! # fn main() -> Result<(), selector_builder::SelectorError> {
//! assert_eq!(
//!     id("main")?.class("container")?.class("editable")?.stringify(),
//!     "#main.container.editable"
//! );
//!
//! assert_eq!(
//!     element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?.stringify(),
//!     r#"a[href$=".png"]:focus"#
//! );
//!
//! let complex = combine(
//!     element("div")?.id("main")?,
//!     Combinator::AdjacentSibling,
//!     element("table")?.id("data")?,
//! );
//! assert_eq!(complex.stringify(), "div#main + table#data");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: categories, simple selectors, combinators and specificity
//! - [`compound`]: the chainable [`Selector`]
//! - [`complex`]: [`ComplexSelector`] and [`combine`]
//! - [`parser`]: selector text parsing
//! - [`error`]: error types

pub mod complex;
pub mod compound;
pub mod error;
pub mod parser;
pub mod types;

pub use complex::{ComplexSelector, SelectorPart};
pub use compound::Selector;
pub use error::{Result, SelectorError};
pub use parser::{parse_compound, parse_selector};
pub use types::{Category, Combinator, SimpleSelector, Specificity};

/// Starts a selector with an element (type) part.
pub fn element(name: impl Into<String>) -> Result<Selector> {
    Selector::new().element(name)
}

/// Starts a selector with `#name`.
pub fn id(name: impl Into<String>) -> Result<Selector> {
    Selector::new().id(name)
}

/// Starts a selector with `.name`.
pub fn class(name: impl Into<String>) -> Result<Selector> {
    Selector::new().class(name)
}

/// Starts a selector with `[expr]`.
pub fn attr(expr: impl Into<String>) -> Result<Selector> {
    Selector::new().attr(expr)
}

/// Starts a selector with `:name`.
pub fn pseudo_class(name: impl Into<String>) -> Result<Selector> {
    Selector::new().pseudo_class(name)
}

/// Starts a selector with `::name`.
pub fn pseudo_element(name: impl Into<String>) -> Result<Selector> {
    Selector::new().pseudo_element(name)
}

/// Joins two selectors as `"<left> <combinator> <right>"`.
///
/// Either side may already be combined; nesting flattens left to right.
pub fn combine(
    left: impl Into<ComplexSelector>,
    combinator: Combinator,
    right: impl Into<ComplexSelector>,
) -> ComplexSelector {
    ComplexSelector::combine(left, combinator, right)
}

/// Like [`combine`], taking the combinator as its text token (`" "`, `">"`, `"+"`, `"~"`).
pub fn combine_with(
    left: impl Into<ComplexSelector>,
    combinator: &str,
    right: impl Into<ComplexSelector>,
) -> Result<ComplexSelector> {
    let combinator = Combinator::from_token(combinator)?;
    Ok(ComplexSelector::combine(left, combinator, right))
}
