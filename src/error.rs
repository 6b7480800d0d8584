use crate::method::Method;
use thiserror::Error;

/// Errors raised by sequence construction, dictionary serialization and
/// baseline table access.
///
/// The parsing engines themselves never fail.
#[derive(Error, Debug)]
pub enum LzcError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no baseline statistics for {method} with alphabet size {alphabet_size}")]
    DataUnavailable { method: Method, alphabet_size: usize },

    /// Dictionary trace larger than its `2n + 2` bound. Unreachable for a
    /// dictionary produced by one of the parsers.
    #[error("dictionary trace needs {needed} slots but capacity is {capacity}")]
    BufferOverflow { needed: usize, capacity: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed baseline table: {0}")]
    MalformedTable(String),
}

pub type Result<T> = std::result::Result<T, LzcError>;
