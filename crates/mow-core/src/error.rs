//! Framework error type.
//!
//! Sub-crates define their own error enums; `MowError` covers decoding of the
//! core symbols and is wrapped by the configuration loader.

use thiserror::Error;

/// The error type for `mow-core` conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MowError {
    #[error("unknown heading {0:?}: expected one of N, E, S, W")]
    UnknownHeading(char),

    #[error("unknown move {0:?}: expected one of L, R, F, B")]
    UnknownMove(char),

    #[error("{0} degrees is not a cardinal heading")]
    InvalidDegrees(i32),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `mow-*` crates.
pub type MowResult<T> = Result<T, MowError>;
