//! Error types for linetint.
//!
//! Errors only arise while constructing a rule set; the editing core clamps
//! invalid coordinates instead of failing.

use std::fmt;

/// Result type alias for linetint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for rule-set construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// A rule token (keyword or region start/end word) was empty.
    EmptyToken,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::EmptyToken => write!(f, "rule token must not be empty"),
        }
    }
}

impl std::error::Error for Error {}
