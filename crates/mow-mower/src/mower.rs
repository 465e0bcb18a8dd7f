//! The `Mower` automaton.

use std::fmt;

use mow_core::{Cell, Heading, Move, MowerId};
use mow_lawn::{Admission, Lawn};
use tracing::{debug, trace};

use crate::{MowTally, StepOutcome};

/// A mower: position, heading, and a finite program with a cursor.
///
/// The cursor is the only control state.  It starts at 0 and the mower is
/// finished once it reaches `program.len()`.  Only the mower's own
/// [`step`](Self::step) / [`execute`](Self::execute) mutate it, and a single
/// mower never runs two instructions concurrently (`step` takes `&mut self`).
///
/// Starting positions are not validated against any lawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mower {
    id:       MowerId,
    position: Cell,
    heading:  Heading,
    program:  Vec<Move>,
    cursor:   usize,
}

impl Mower {
    /// A mower at `position` facing `heading` with an empty program.
    pub fn new(id: MowerId, position: Cell, heading: Heading) -> Self {
        Self {
            id,
            position,
            heading,
            program: Vec::new(),
            cursor:  0,
        }
    }

    pub fn with_program(mut self, program: Vec<Move>) -> Self {
        self.instruct(program);
        self
    }

    /// Replace the program and rewind the cursor.
    pub fn instruct(&mut self, program: Vec<Move>) {
        self.program = program;
        self.cursor = 0;
    }

    #[inline]
    pub fn id(&self) -> MowerId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn program(&self) -> &[Move] {
        &self.program
    }

    /// Index of the next instruction to execute.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.program.len()
    }

    /// The cell a successful `mv` would leave the mower on.
    ///
    /// Rotations return the current position.  Backward steps negate the
    /// forward vector; the heading is never changed by a translation.
    /// Returns `None` if the target coordinate overflows `i32`.
    pub fn target(&self, mv: Move) -> Option<Cell> {
        let (dx, dy) = self.heading.unit_vector();
        match mv {
            Move::RotateLeft | Move::RotateRight => Some(self.position),
            Move::StepForward  => self.position.offset(dx, dy),
            Move::StepBackward => self.position.offset(-dx, -dy),
        }
    }

    /// Execute the instruction under the cursor and advance it.
    ///
    /// Returns `None` once the program is exhausted.
    pub fn step(&mut self, lawn: &Lawn) -> Option<StepOutcome> {
        let mv = self.next_move()?;
        self.cursor += 1;
        Some(self.apply(mv, lawn))
    }

    /// The instruction [`step`](Self::step) will execute next.
    #[inline]
    pub fn next_move(&self) -> Option<Move> {
        self.program.get(self.cursor).copied()
    }

    /// Run the remaining program to completion.
    pub fn execute(&mut self, lawn: &Lawn) -> MowTally {
        self.execute_with(lawn, |_, _| {})
    }

    /// Like [`execute`](Self::execute), reporting each instruction and its
    /// outcome to `on_step` as it completes.
    pub fn execute_with<F>(&mut self, lawn: &Lawn, mut on_step: F) -> MowTally
    where
        F: FnMut(Move, StepOutcome),
    {
        let mut tally = MowTally::default();
        while let Some(mv) = self.next_move() {
            let Some(outcome) = self.step(lawn) else { break };
            on_step(mv, outcome);
            tally.record(outcome);
        }
        debug!(
            mower = %self.id,
            position = %self.position,
            heading = %self.heading,
            moves = tally.moves,
            rejected = tally.contended + tally.out_of_bounds,
            "program finished"
        );
        tally
    }

    fn apply(&mut self, mv: Move, lawn: &Lawn) -> StepOutcome {
        match mv {
            Move::RotateLeft => {
                self.heading = self.heading.turned_left();
                StepOutcome::Rotated(self.heading)
            }
            Move::RotateRight => {
                self.heading = self.heading.turned_right();
                StepOutcome::Rotated(self.heading)
            }
            Move::StepForward | Move::StepBackward => self.translate(mv, lawn),
        }
    }

    fn translate(&mut self, mv: Move, lawn: &Lawn) -> StepOutcome {
        let Some(candidate) = self.target(mv) else {
            trace!(mower = %self.id, %mv, "target coordinate overflows");
            return StepOutcome::OutOfBounds;
        };

        match lawn.admit(candidate) {
            Admission::Granted(permit) => {
                self.position = candidate;
                // Release right after the commit: the plot is an admission
                // check, not a standing claim.
                drop(permit);
                StepOutcome::Moved(candidate)
            }
            Admission::Contended => {
                trace!(mower = %self.id, %mv, target = %candidate, "move contended");
                StepOutcome::Contended(candidate)
            }
            Admission::OutOfBounds => {
                trace!(mower = %self.id, %mv, target = %candidate, "move leaves lawn");
                StepOutcome::OutOfBounds
            }
        }
    }
}

impl fmt::Display for Mower {
    /// `"<x> <y> <heading letter>"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}
