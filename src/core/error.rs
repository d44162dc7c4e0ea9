//! Errors raised at the edges of the engine.
//!
//! Play resolution itself is total. Only turning free-form text into the
//! closed call types can fail.

use thiserror::Error;

/// Failure to parse a call or side identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown side {0:?} (expected HOME or AWAY)")]
    UnknownSide(String),
    #[error("unknown offensive play type {0:?}")]
    UnknownPlayType(String),
    #[error("unknown defensive flavor {0:?}")]
    UnknownFlavor(String),
}
