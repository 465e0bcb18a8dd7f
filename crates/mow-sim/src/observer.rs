//! Fleet observer trait for progress reporting and data collection.

use mow_core::{Move, MowerId};
use mow_mower::{MowTally, Mower, StepOutcome};

use crate::RunSummary;

/// Callbacks invoked by [`Fleet::run`][crate::Fleet::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// Mowers run concurrently, so the per-mower hooks are called from several
/// threads at once: hooks take `&self` and the trait requires `Sync`.  Use
/// atomics or a `Mutex` for any state the observer accumulates.
pub trait FleetObserver: Sync {
    /// Called on the mower's own thread before its first instruction.
    fn on_mower_start(&self, _mower: &Mower) {}

    /// Called after every instruction.
    fn on_step(&self, _mower: MowerId, _mv: Move, _outcome: StepOutcome) {}

    /// Called on the mower's own thread after its last instruction.
    fn on_mower_done(&self, _mower: &Mower, _tally: &MowTally) {}

    /// Called once, after every mower has finished.
    fn on_fleet_done(&self, _mowers: &[Mower], _summary: &RunSummary) {}
}

/// A [`FleetObserver`] that does nothing.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
