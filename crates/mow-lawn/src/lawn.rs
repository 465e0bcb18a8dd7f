//! The `Lawn` — bounded area plus the lazily materialized plot-lock table.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mow_core::{Area, Cell};
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{Admission, LawnError, LawnResult, PlotLock, PlotPermit};

/// A bounded lawn shared by every mower of a run.
///
/// The area is fixed at construction.  The plot table starts empty and gains
/// one [`PlotLock`] the first time any cell is referenced; entries are never
/// removed, so the table only grows.
///
/// `Lawn` is `Sync`: all methods take `&self` and may be called from many
/// threads at once.
#[derive(Debug)]
pub struct Lawn {
    area:  Area,
    plots: RwLock<FxHashMap<Cell, PlotLock>>,
}

impl Lawn {
    /// Create a lawn covering `[0, width] × [0, height]`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_area(Area::new(width, height))
    }

    pub fn with_area(area: Area) -> Self {
        Self {
            area,
            plots: RwLock::new(FxHashMap::default()),
        }
    }

    #[inline]
    pub fn area(&self) -> Area {
        self.area
    }

    /// Pure boundary test against the fixed area.  Never touches lock state.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.area.contains(cell)
    }

    /// Try to take exclusive ownership of `cell`'s plot without waiting.
    ///
    /// The plot lock is created (unheld) on first reference.  Returns `true`
    /// iff the plot was free and is now held by the caller.
    pub fn try_acquire(&self, cell: Cell) -> bool {
        // Fast path: the plot already exists.
        if let Some(plot) = self.read_plots().get(&cell) {
            return plot.try_acquire();
        }

        // First touch.  Another caller may have inserted the plot between the
        // two lock scopes; entry-or-insert keeps whichever lock got there first.
        let mut plots = self.write_plots();
        plots.entry(cell).or_default().try_acquire()
    }

    /// Release a plot previously taken with [`try_acquire`](Self::try_acquire).
    ///
    /// # Errors
    ///
    /// - [`LawnError::UnknownPlot`] if `cell` was never referenced.
    /// - [`LawnError::NotHeld`] if the plot is currently free.
    ///
    /// Both leave every lock untouched.
    pub fn release(&self, cell: Cell) -> LawnResult<()> {
        let plots = self.read_plots();
        let plot = plots.get(&cell).ok_or(LawnError::UnknownPlot(cell))?;
        if plot.release() {
            Ok(())
        } else {
            Err(LawnError::NotHeld(cell))
        }
    }

    /// Acquire `cell` and check it lies inside the area.
    ///
    /// Containment is only evaluated when the acquisition succeeds.  A plot
    /// that is acquired but lies outside the area is released again before
    /// returning `false`, so out-of-bounds plots never stay locked.  On
    /// `true` the caller holds the plot and must [`release`](Self::release) it.
    pub fn is_mowable(&self, cell: Cell) -> bool {
        if !self.try_acquire(cell) {
            return false;
        }
        if self.contains(cell) {
            return true;
        }
        if let Err(e) = self.release(cell) {
            tracing::error!(%cell, error = %e, "failed to release out-of-bounds plot");
        }
        false
    }

    /// Tagged acquisition: bounds first, then the plot lock.
    ///
    /// Out-of-bounds cells are rejected without creating a table entry.  A
    /// granted [`PlotPermit`] releases the plot when dropped.
    pub fn admit(&self, cell: Cell) -> Admission<'_> {
        if !self.contains(cell) {
            trace!(%cell, "plot outside lawn");
            return Admission::OutOfBounds;
        }
        if self.try_acquire(cell) {
            Admission::Granted(PlotPermit::new(self, cell))
        } else {
            trace!(%cell, "plot contended");
            Admission::Contended
        }
    }

    /// `true` if `cell`'s plot exists and is currently held.
    pub fn is_held(&self, cell: Cell) -> bool {
        self.read_plots().get(&cell).is_some_and(PlotLock::is_held)
    }

    /// Number of plot locks materialized so far.
    pub fn plot_count(&self) -> usize {
        self.read_plots().len()
    }

    // A panic while a guard is live cannot leave the map half-updated
    // (insertions are single `entry` calls), so poisoning is ignored.
    fn read_plots(&self) -> RwLockReadGuard<'_, FxHashMap<Cell, PlotLock>> {
        self.plots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_plots(&self) -> RwLockWriteGuard<'_, FxHashMap<Cell, PlotLock>> {
        self.plots.write().unwrap_or_else(PoisonError::into_inner)
    }
}
