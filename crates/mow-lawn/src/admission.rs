//! Tagged acquisition results and the self-releasing plot permit.

use mow_core::Cell;

use crate::Lawn;

/// Outcome of [`Lawn::admit`].
#[derive(Debug)]
#[must_use = "dropping a granted admission releases the plot immediately"]
pub enum Admission<'a> {
    /// The plot was free and is held until the permit is dropped.
    Granted(PlotPermit<'a>),
    /// Another caller holds the plot right now.
    Contended,
    /// The cell lies outside the lawn area.
    OutOfBounds,
}

impl Admission<'_> {
    #[inline]
    pub fn is_granted(&self) -> bool {
        matches!(self, Admission::Granted(_))
    }
}

/// Exclusive hold on one plot.  Releases the plot on drop.
#[derive(Debug)]
pub struct PlotPermit<'a> {
    lawn: &'a Lawn,
    cell: Cell,
}

impl<'a> PlotPermit<'a> {
    pub(crate) fn new(lawn: &'a Lawn, cell: Cell) -> Self {
        Self { lawn, cell }
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

impl Drop for PlotPermit<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.lawn.release(self.cell) {
            tracing::error!(cell = %self.cell, error = %e, "plot permit released an unheld plot");
        }
    }
}
