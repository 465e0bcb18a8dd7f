//! `mow-lawn` — the bounded lawn and its per-plot mutual exclusion.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`plot`]      | `PlotLock` — a non-blocking binary lock for one cell         |
//! | [`lawn`]      | `Lawn` — `Area` + lazily grown `Cell → PlotLock` table       |
//! | [`admission`] | `Admission`, `PlotPermit` — tagged, self-releasing acquire   |
//! | [`error`]     | `LawnError`, `LawnResult<T>`                                 |
//!
//! # Locking model
//!
//! A plot lock is a point-in-time admission check: a mower acquires the
//! destination plot, commits its move, and releases the plot straight away.
//! Resting cells are never locked, so no mower ever holds more than one plot
//! and no plot is held across a suspension point.  Acquisition never waits:
//! a held plot reports contention immediately, which rules out deadlock.
//!
//! The `Cell → PlotLock` table is owned by the `Lawn` and grows monotonically.
//! Its first-touch insertion runs under a write lock with entry-or-insert, so
//! concurrent first touches of the same cell always install one lock.

pub mod admission;
pub mod error;
pub mod lawn;
pub mod plot;


pub use admission::{Admission, PlotPermit};
pub use error::{LawnError, LawnResult};
pub use lawn::Lawn;
pub use plot::PlotLock;
