use std::result::Result as StdResult;

use thiserror::Error;

/// Result type for scrim operations.
pub type Result<T> = StdResult<T, Error>;

/// Crate error type.
///
/// Most caller-misuse conditions (closing with nothing open, swapping content
/// with no session) are well-defined no-ops rather than errors; this type
/// covers the cases that genuinely cannot be defaulted away.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("invalid: {0}")]
    /// Invalid input, such as a non-string style value.
    Invalid(String),

    #[error("missing context: {0}")]
    /// A required context entry was never provided.
    MissingContext(String),
}
