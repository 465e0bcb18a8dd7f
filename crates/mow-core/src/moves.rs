//! Mower instructions.
//!
//! Rotations only change the heading.  Steps translate by one cell along the
//! current heading (forward) or against it (backward) without turning.

use crate::{MowError, MowResult};

/// A single symbolic instruction, decoded from `L`, `R`, `F` or `B`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    RotateLeft,
    RotateRight,
    StepForward,
    StepBackward,
}

impl Move {
    /// `true` for `StepForward` and `StepBackward`.
    #[inline]
    pub fn is_translation(self) -> bool {
        matches!(self, Move::StepForward | Move::StepBackward)
    }

    pub fn symbol(self) -> char {
        match self {
            Move::RotateLeft   => 'L',
            Move::RotateRight  => 'R',
            Move::StepForward  => 'F',
            Move::StepBackward => 'B',
        }
    }

    /// Decode a whole instruction string.
    ///
    /// # Errors
    ///
    /// Returns [`MowError::UnknownMove`] for the first symbol outside `LRFB`.
    pub fn parse_program(s: &str) -> MowResult<Vec<Move>> {
        s.chars().map(Move::try_from).collect()
    }
}

impl TryFrom<char> for Move {
    type Error = MowError;

    fn try_from(c: char) -> MowResult<Self> {
        match c {
            'L' => Ok(Move::RotateLeft),
            'R' => Ok(Move::RotateRight),
            'F' => Ok(Move::StepForward),
            'B' => Ok(Move::StepBackward),
            other => Err(MowError::UnknownMove(other)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
