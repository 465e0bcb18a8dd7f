//! The `ReportWriter` trait implemented by all backend writers.

use mow_mower::Mower;

use crate::{OutputResult, PositionRow};

/// Trait implemented by the text and CSV writers.
pub trait ReportWriter {
    /// Write one mower's final position.
    fn write_row(&mut self, row: &PositionRow) -> OutputResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write every mower in order, then finish the writer.
pub fn write_report<W: ReportWriter>(writer: &mut W, mowers: &[Mower]) -> OutputResult<()> {
    for mower in mowers {
        writer.write_row(&PositionRow::from(mower))?;
    }
    writer.finish()
}
