use thiserror::Error;

use object_utils::ObjectError;
use selector_builder::SelectorError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("selector error: {0}")]
    Selector(#[from] SelectorError),

    #[error("object error: {0}")]
    Object(#[from] ObjectError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
