//! The `Fleet` and its concurrent run.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use mow_lawn::Lawn;
use mow_mower::{MowTally, Mower};
use tracing::debug;

use crate::FleetObserver;

/// How mowers are mapped onto units of concurrency.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Dispatch {
    /// One scoped OS thread per mower.
    #[default]
    Threads,
    /// One Rayon task per mower on the global pool.
    #[cfg(feature = "parallel")]
    Pool,
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::Threads => f.write_str("threads"),
            #[cfg(feature = "parallel")]
            Dispatch::Pool => f.write_str("pool"),
        }
    }
}

/// Aggregate result of one [`Fleet::run`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct RunSummary {
    pub mowers:  usize,
    pub tally:   MowTally,
    pub elapsed: Duration,
}

/// A lawn and the mowers that share it.
///
/// Create via [`FleetBuilder`][crate::FleetBuilder].
pub struct Fleet {
    pub(crate) lawn:     Lawn,
    pub(crate) mowers:   Vec<Mower>,
    pub(crate) dispatch: Dispatch,
}

impl Fleet {
    pub fn lawn(&self) -> &Lawn {
        &self.lawn
    }

    /// Mowers in configuration order.
    pub fn mowers(&self) -> &[Mower] {
        &self.mowers
    }

    pub fn into_mowers(self) -> Vec<Mower> {
        self.mowers
    }

    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    /// Execute every mower's remaining program concurrently and wait for all
    /// of them to finish.
    ///
    /// A panic inside any mower's unit is propagated once all units are joined.
    pub fn run<O: FleetObserver>(&mut self, observer: &O) -> RunSummary {
        let started = Instant::now();
        let lawn = &self.lawn;
        debug!(mowers = self.mowers.len(), dispatch = %self.dispatch, area = %lawn.area(), "fleet starting");

        let tallies: Vec<MowTally> = match self.dispatch {
            Dispatch::Threads => thread::scope(|s| {
                let handles: Vec<_> = self
                    .mowers
                    .iter_mut()
                    .map(|mower| s.spawn(move || drive(mower, lawn, observer)))
                    .collect();
                handles
                    .into_iter()
                    .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                    .collect()
            }),

            #[cfg(feature = "parallel")]
            Dispatch::Pool => {
                use rayon::prelude::*;

                self.mowers
                    .par_iter_mut()
                    .map(|mower| drive(mower, lawn, observer))
                    .collect()
            }
        };

        let mut summary = RunSummary {
            mowers:  tallies.len(),
            tally:   MowTally::default(),
            elapsed: started.elapsed(),
        };
        for tally in tallies {
            summary.tally += tally;
        }

        debug!(
            moves = summary.tally.moves,
            contended = summary.tally.contended,
            out_of_bounds = summary.tally.out_of_bounds,
            elapsed_us = summary.elapsed.as_micros() as u64,
            "fleet finished"
        );
        observer.on_fleet_done(&self.mowers, &summary);
        summary
    }
}

/// One mower's unit of concurrency.
fn drive<O: FleetObserver>(mower: &mut Mower, lawn: &Lawn, observer: &O) -> MowTally {
    observer.on_mower_start(mower);
    let id = mower.id();
    let tally = mower.execute_with(lawn, |mv, outcome| observer.on_step(id, mv, outcome));
    observer.on_mower_done(mower, &tally);
    tally
}
