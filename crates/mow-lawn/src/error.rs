use mow_core::Cell;
use thiserror::Error;

/// Caller-misuse errors from [`Lawn::release`][crate::Lawn::release].
///
/// Both are programming errors rather than runtime conditions; neither
/// changes the state of any plot lock.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LawnError {
    #[error("plot {0} was never acquired")]
    UnknownPlot(Cell),

    #[error("plot {0} is not held")]
    NotHeld(Cell),
}

pub type LawnResult<T> = Result<T, LawnError>;
