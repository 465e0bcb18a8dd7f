//! Unit tests for mow-output.

use std::fs::File;
use std::io::Read;

use mow_core::{Cell, Heading, MowerId};
use mow_mower::Mower;

use crate::{CsvWriter, PositionRow, ReportWriter, TextWriter, write_report};

fn finished_mowers() -> Vec<Mower> {
    vec![
        Mower::new(MowerId(0), Cell::new(1, 3), Heading::North),
        Mower::new(MowerId(1), Cell::new(5, 1), Heading::East),
        Mower::new(MowerId(2), Cell::new(-2, 0), Heading::West),
    ]
}

#[cfg(test)]
mod row {
    use super::*;

    #[test]
    fn row_from_mower() {
        let m = Mower::new(MowerId(9), Cell::new(4, -1), Heading::South);
        assert_eq!(
            PositionRow::from(&m),
            PositionRow { mower_id: 9, x: 4, y: -1, heading: Heading::South }
        );
    }
}

#[cfg(test)]
mod text {
    use super::*;

    #[test]
    fn one_line_per_mower() {
        let mut writer = TextWriter::new(Vec::new());
        write_report(&mut writer, &finished_mowers()).unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "1 3 N\n5 1 E\n-2 0 W\n");
    }

    #[test]
    fn empty_report_is_empty() {
        let mut writer = TextWriter::new(Vec::new());
        write_report(&mut writer, &[]).unwrap();
        assert!(writer.into_inner().is_empty());
    }

    #[test]
    fn finish_is_idempotent() {
        let mut writer = TextWriter::new(Vec::new());
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(test)]
mod csv {
    use super::*;

    #[test]
    fn header_and_records() {
        let mut writer = CsvWriter::new(Vec::new()).unwrap();
        write_report(&mut writer, &finished_mowers()).unwrap();
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "mower_id,x,y,heading\n0,1,3,N\n1,5,1,E\n2,-2,0,W\n");
    }

    #[test]
    fn writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positions.csv");

        let mut writer = CsvWriter::new(File::create(&path).unwrap()).unwrap();
        write_report(&mut writer, &finished_mowers()[..1]).unwrap();
        writer.finish().unwrap();
        drop(writer);

        let mut contents = String::new();
        File::open(&path).unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "mower_id,x,y,heading\n0,1,3,N\n");
    }
}
