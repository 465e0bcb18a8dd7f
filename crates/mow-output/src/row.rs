//! Plain data row written by output backends.

use mow_core::Heading;
use mow_mower::Mower;

/// One mower's final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRow {
    pub mower_id: u32,
    pub x:        i32,
    pub y:        i32,
    pub heading:  Heading,
}

impl From<&Mower> for PositionRow {
    fn from(mower: &Mower) -> Self {
        let position = mower.position();
        Self {
            mower_id: mower.id().0,
            x:        position.x,
            y:        position.y,
            heading:  mower.heading(),
        }
    }
}
