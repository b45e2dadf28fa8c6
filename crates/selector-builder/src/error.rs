//! Error types for building and parsing selectors.

use thiserror::Error;

use crate::types::Category;

/// Errors that can occur while extending, combining or parsing a selector.
///
/// A failed operation never changes the selector it was called on, so the
/// caller can keep using the last valid value.
///
/// # Examples
///
/// ```rust
/// use selector_builder::{Category, SelectorError, element};
///
/// let err = element("table").unwrap().element("div").unwrap_err();
/// assert_eq!(err, SelectorError::DuplicateCategory(Category::Element));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Element, id or pseudo-element was appended a second time.
    #[error(
        "element, id and pseudo-element should not occur more than one time inside the selector (repeated {0})"
    )]
    DuplicateCategory(Category),

    /// A category was appended after a strictly later one.
    #[error(
        "selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({attempted} after {current})"
    )]
    Order {
        attempted: Category,
        current: Category,
    },

    /// The token is not one of `' '`, `'>'`, `'+'`, `'~'`.
    #[error("invalid combinator: {0:?}")]
    InvalidCombinator(String),

    /// Selector text could not be parsed.
    #[error("selector syntax error: {0}")]
    InvalidSyntax(String),
}

pub type Result<T, E = SelectorError> = std::result::Result<T, E>;
