//! Cardinal orientation stored as degrees.
//!
//! Rotations are normalized modulo 360, so the value is always one of
//! `{0, 90, 180, 270}`.

use std::str::FromStr;

use crate::{MowError, MowResult};

/// One of the four cardinal headings.  The discriminant is the heading in
/// degrees, clockwise from North.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Heading {
    #[default]
    North = 0,
    East  = 90,
    South = 180,
    West  = 270,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    #[inline]
    pub fn degrees(self) -> i32 {
        self as i32
    }

    /// Heading for `degrees`, normalized modulo 360.
    ///
    /// # Errors
    ///
    /// Returns [`MowError::InvalidDegrees`] unless `degrees` is a multiple of 90.
    pub fn from_degrees(degrees: i32) -> MowResult<Self> {
        match degrees.rem_euclid(360) {
            0   => Ok(Heading::North),
            90  => Ok(Heading::East),
            180 => Ok(Heading::South),
            270 => Ok(Heading::West),
            _   => Err(MowError::InvalidDegrees(degrees)),
        }
    }

    /// Rotate by a multiple of 90 degrees.
    fn rotated(self, delta: i32) -> Self {
        match (self.degrees() + delta).rem_euclid(360) {
            0   => Heading::North,
            90  => Heading::East,
            180 => Heading::South,
            _   => Heading::West,
        }
    }

    /// Heading after a −90° rotation.
    #[inline]
    pub fn turned_left(self) -> Self {
        self.rotated(-90)
    }

    /// Heading after a +90° rotation.
    #[inline]
    pub fn turned_right(self) -> Self {
        self.rotated(90)
    }

    /// One-cell step forward along this heading as `(dx, dy)`.
    pub fn unit_vector(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East  => (1, 0),
            Heading::South => (0, -1),
            Heading::West  => (-1, 0),
        }
    }

    /// Configuration / report letter.
    pub fn letter(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East  => 'E',
            Heading::South => 'S',
            Heading::West  => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = MowError;

    fn try_from(c: char) -> MowResult<Self> {
        match c {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            other => Err(MowError::UnknownHeading(other)),
        }
    }
}

impl FromStr for Heading {
    type Err = MowError;

    fn from_str(s: &str) -> MowResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::try_from(c),
            _ => Err(MowError::Parse(format!("invalid heading {s:?}"))),
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
