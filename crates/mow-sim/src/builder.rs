//! Fluent builder for constructing a [`Fleet`].

use std::collections::HashSet;

use mow_lawn::Lawn;
use mow_mower::Mower;

use crate::{Dispatch, Fleet, SimError, SimResult};

/// Fluent builder for [`Fleet`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default               |
/// |-----------------|-----------------------|
/// | `.mower(m)`     | no mowers             |
/// | `.mowers(iter)` | no mowers             |
/// | `.dispatch(d)`  | `Dispatch::Threads`   |
pub struct FleetBuilder {
    lawn:     Lawn,
    mowers:   Vec<Mower>,
    dispatch: Dispatch,
}

impl FleetBuilder {
    /// Start a fleet on `lawn`.  The fleet owns the lawn.
    pub fn new(lawn: Lawn) -> Self {
        Self {
            lawn,
            mowers:   Vec::new(),
            dispatch: Dispatch::default(),
        }
    }

    pub fn mower(mut self, mower: Mower) -> Self {
        self.mowers.push(mower);
        self
    }

    pub fn mowers<I: IntoIterator<Item = Mower>>(mut self, mowers: I) -> Self {
        self.mowers.extend(mowers);
        self
    }

    pub fn dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = dispatch;
        self
    }

    /// Validate that mower IDs are unique and return a ready-to-run [`Fleet`].
    pub fn build(self) -> SimResult<Fleet> {
        let mut seen = HashSet::with_capacity(self.mowers.len());
        for mower in &self.mowers {
            if !seen.insert(mower.id()) {
                return Err(SimError::DuplicateMower(mower.id()));
            }
        }

        Ok(Fleet {
            lawn:     self.lawn,
            mowers:   self.mowers,
            dispatch: self.dispatch,
        })
    }
}
