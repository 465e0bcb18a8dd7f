//! Diagnostics for the `mow` binary.
//!
//! Tracing goes to stderr so stdout carries only the position report.

use mow_core::{Move, MowerId};
use mow_mower::{MowTally, Mower, StepOutcome};
use mow_sim::{FleetObserver, RunSummary};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; defaults to `warn` if unset.
///
/// ```bash
/// RUST_LOG=mow=info,mow_mower=trace mow lawn.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

/// Reports fleet lifecycle through `tracing`.
pub struct LoggingObserver;

impl FleetObserver for LoggingObserver {
    fn on_mower_start(&self, mower: &Mower) {
        debug!(mower = %mower.id(), start = %mower, instructions = mower.program().len(), "mower deployed");
    }

    fn on_step(&self, mower: MowerId, mv: Move, outcome: StepOutcome) {
        if let StepOutcome::Contended(target) = outcome {
            debug!(%mower, %mv, %target, "plot taken by another mower");
        }
    }

    fn on_mower_done(&self, mower: &Mower, tally: &MowTally) {
        info!(
            mower = %mower.id(),
            end = %mower,
            moves = tally.moves,
            contended = tally.contended,
            out_of_bounds = tally.out_of_bounds,
            "mower finished"
        );
    }

    fn on_fleet_done(&self, _mowers: &[Mower], summary: &RunSummary) {
        info!(
            mowers = summary.mowers,
            steps = summary.tally.steps(),
            elapsed_ms = summary.elapsed.as_secs_f64() * 1_000.0,
            "fleet finished"
        );
    }
}
