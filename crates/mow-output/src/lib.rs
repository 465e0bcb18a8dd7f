//! `mow-output` — writes final mower positions.
//!
//! # Backends
//!
//! | Writer        | Output                                               |
//! |---------------|------------------------------------------------------|
//! | `TextWriter`  | one `"<x> <y> <heading>"` line per mower             |
//! | `CsvWriter`   | `mower_id,x,y,heading` header plus one record each   |
//!
//! Both implement [`ReportWriter`]; [`write_report`] drives either one over
//! a slice of finished mowers.

pub mod csv;
pub mod error;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::PositionRow;
pub use text::TextWriter;
pub use writer::{ReportWriter, write_report};
