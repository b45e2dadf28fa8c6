//! Error types for the object helpers.

use thiserror::Error;

/// Errors that can occur in the object, ticket and JSON helpers.
#[derive(Error, Debug)]
pub enum ObjectError {
    /// Two values under the same key cannot be summed (e.g. a number and a string).
    #[error("cannot merge values for key {key:?}")]
    CannotMerge { key: String },

    /// A letter's positions are not an array of non-negative integers.
    #[error("positions for letter {letter:?} must be an array of non-negative integers")]
    InvalidPositions { letter: String },

    /// A customer paid with a bill the box office does not take.
    #[error("unsupported bill: {0}")]
    UnsupportedBill(u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ObjectError> = std::result::Result<T, E>;
