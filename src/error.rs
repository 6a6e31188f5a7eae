//! Error types for parsing, value access and schema validation.
//!
//! Every fallible operation in the crate returns [`Result`], built over a
//! single [`Error`] enum:
//!
//! - **Parse errors** carry the line, column and a two-line source excerpt
//!   with a caret pointing at the offending position.
//! - **Access errors** ([`Error::Type`], [`Error::OutOfRange`]) are raised by
//!   the typed accessors and the indexing API on [`crate::JonValue`].
//! - **Schema errors** ([`Error::InvalidSchema`]) mean the *schema* is
//!   malformed; instance violations are collected into the validation report
//!   instead of being raised.
//!
//! ## Examples
//!
//! ```rust
//! use jon::{parse, Error};
//!
//! let err = parse("key: [1, 2").unwrap_err();
//! assert!(matches!(err, Error::Parse { .. }));
//! assert!(err.to_string().contains('^'));
//! ```

use std::fmt;
use thiserror::Error;

/// All errors produced by the crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The lexer or parser could not continue. `excerpt` holds the offending
    /// source line followed by a caret line.
    #[error("parse error at line {line}, column {col}:\n{excerpt}")]
    Parse {
        line: usize,
        col: usize,
        excerpt: String,
    },

    /// A value was accessed as the wrong runtime type.
    #[error("type error: {0}")]
    Type(String),

    /// A missing object key or an out-of-bounds array index.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// The schema passed to `validate` is itself malformed.
    #[error("invalid schema at '{path}': {msg}")]
    InvalidSchema { path: String, msg: String },

    /// Reserved for callers that promote a validation report into an error;
    /// `validate` itself never returns this.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A `$ref` pointed at a location that does not exist.
    #[error("unresolved reference '${0}'")]
    UnresolvedRef(String),

    /// A `$ref` chain referred back to itself.
    #[error("cyclic reference '${0}'")]
    CyclicRef(String),

    /// Reading a file failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    pub(crate) fn parse(line: usize, col: usize, excerpt: String) -> Self {
        Error::Parse { line, col, excerpt }
    }

    /// Creates a type error for a mismatched accessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jon::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::Type(format!("expected {expected}, got {found}"))
    }

    /// Creates a type error with a free-form message.
    pub fn type_error<T: fmt::Display>(msg: T) -> Self {
        Error::Type(msg.to_string())
    }

    /// Creates an out-of-range error for a missing key or index.
    pub fn out_of_range<T: fmt::Display>(msg: T) -> Self {
        Error::OutOfRange(msg.to_string())
    }

    /// Creates an invalid-schema error naming the offending schema path.
    pub fn invalid_schema<T: fmt::Display>(path: &str, msg: T) -> Self {
        Error::InvalidSchema {
            path: path.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error for file reading failures.
    pub fn io<T: fmt::Display>(msg: T) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
