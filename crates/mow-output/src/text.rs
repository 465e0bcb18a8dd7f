//! Plain-text backend: `"<x> <y> <heading>"` per line.

use std::io::Write;

use crate::{OutputResult, PositionRow};
use crate::writer::ReportWriter;

pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_row(&mut self, row: &PositionRow) -> OutputResult<()> {
        writeln!(self.out, "{} {} {}", row.x, row.y, row.heading)?;
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
