//! Per-instruction outcomes and their per-program tally.

use std::ops::AddAssign;

use mow_core::{Cell, Heading};

/// What one instruction did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// A rotation; carries the new heading.
    Rotated(Heading),
    /// A translation was admitted; carries the new position.
    Moved(Cell),
    /// The target plot was held by another mower's in-flight move.
    Contended(Cell),
    /// The target lies outside the lawn.
    OutOfBounds,
}

impl StepOutcome {
    /// `true` for translations that left the mower where it was.
    #[inline]
    pub fn is_rejected(self) -> bool {
        matches!(self, StepOutcome::Contended(_) | StepOutcome::OutOfBounds)
    }
}

/// Counts of each [`StepOutcome`] kind over one or more programs.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct MowTally {
    pub rotations:     u64,
    pub moves:         u64,
    pub contended:     u64,
    pub out_of_bounds: u64,
}

impl MowTally {
    pub fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Rotated(_)   => self.rotations += 1,
            StepOutcome::Moved(_)     => self.moves += 1,
            StepOutcome::Contended(_) => self.contended += 1,
            StepOutcome::OutOfBounds  => self.out_of_bounds += 1,
        }
    }

    /// Total instructions executed.
    pub fn steps(&self) -> u64 {
        self.rotations + self.moves + self.contended + self.out_of_bounds
    }
}

impl AddAssign for MowTally {
    fn add_assign(&mut self, rhs: MowTally) {
        self.rotations     += rhs.rotations;
        self.moves         += rhs.moves;
        self.contended     += rhs.contended;
        self.out_of_bounds += rhs.out_of_bounds;
    }
}
