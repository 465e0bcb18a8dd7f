//! Integer grid coordinates and the rectangular lawn area.
//!
//! Cells are compared by value: two `Cell`s with equal coordinates are the
//! same plot for locking purposes.

/// An integer `(x, y)` grid coordinate.
///
/// `y` grows northwards and `x` grows eastwards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell `(dx, dy)` away from `self`, or `None` if either coordinate
    /// overflows `i32`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Cell> {
        Some(Cell {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle `[0, width] × [0, height]` with inclusive bounds.
///
/// A `0 × 0` area still contains the origin.  Dimensions are unsigned so a
/// negative extent cannot be constructed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub width:  u32,
    pub height: u32,
}

impl Area {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` iff `0 ≤ x ≤ width` and `0 ≤ y ≤ height`.
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        (0..=i64::from(self.width)).contains(&i64::from(cell.x))
            && (0..=i64::from(self.height)).contains(&i64::from(cell.y))
    }

    /// Number of cells inside the area.
    pub fn cell_count(self) -> u64 {
        (u64::from(self.width) + 1) * (u64::from(self.height) + 1)
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
