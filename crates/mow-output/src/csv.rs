//! CSV output backend.

use std::io::Write;

use csv::Writer;

use crate::{OutputError, OutputResult, PositionRow};
use crate::writer::ReportWriter;

/// Writes one `mower_id,x,y,heading` record per mower.
pub struct CsvWriter<W: Write> {
    out:      Writer<W>,
    finished: bool,
}

impl<W: Write> CsvWriter<W> {
    /// Wrap `out` and write the header row.
    pub fn new(out: W) -> OutputResult<Self> {
        let mut out = Writer::from_writer(out);
        out.write_record(["mower_id", "x", "y", "heading"])?;
        Ok(Self { out, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.out
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> ReportWriter for CsvWriter<W> {
    fn write_row(&mut self, row: &PositionRow) -> OutputResult<()> {
        self.out.write_record(&[
            row.mower_id.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.heading.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
