//! Error types for the xmlemit library.

use std::io;
use thiserror::Error;

/// Result type alias for xmlemit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during report emission.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing emitted output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An empty token was passed to the substitution routine.
    ///
    /// This is a caller contract violation, not a runtime condition:
    /// it usually means an unset token name was looked up by mistake.
    #[error("substitution pattern must not be empty")]
    EmptyPattern,
}
