//! `mow-mower` — the mower state machine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`mower`]   | `Mower` — position, heading, program, cursor             |
//! | [`outcome`] | `StepOutcome` per instruction, `MowTally` per program    |
//!
//! # Movement model
//!
//! A mower runs its program one instruction at a time:
//!
//! 1. `L`/`R` rotate the heading by ∓90° without touching the lawn.
//! 2. `F`/`B` compute the neighbouring cell along (or against) the heading
//!    and ask [`Lawn::admit`][mow_lawn::Lawn::admit] for it.
//! 3. On a granted admission the position is committed and the plot is
//!    released immediately; the resting cell is never held.
//! 4. Contention and out-of-lawn targets are silent no-ops for that
//!    instruction.  Nothing is retried.

pub mod mower;
pub mod outcome;

#[cfg(test)]
mod tests;

pub use mower::Mower;
pub use outcome::{MowTally, StepOutcome};
