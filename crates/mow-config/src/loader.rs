//! Text configuration loader.
//!
//! # Format
//!
//! ```text
//! 5 5
//! 1 2 N
//! LFLFLFLFF
//! 3 3 E
//! FFRFFRFRRF
//! ```
//!
//! | Line            | Meaning                                                   |
//! |-----------------|-----------------------------------------------------------|
//! | `W H`           | Lawn header: area `[0, W] × [0, H]`, both unsigned; extra fields ignored |
//! | `X Y D`         | Mower start: signed coordinates, heading in `N E S W`      |
//! | `[LRFB]+`       | That mower's program                                      |
//!
//! The header comes first; mower/program line pairs follow.  Blank lines and
//! surrounding whitespace are ignored.  Mower starts are not checked against
//! the lawn.  Mowers receive `MowerId`s in file order.

use std::io::Read;
use std::path::Path;

use mow_core::{Area, Cell, Heading, Move, MowerId};
use mow_lawn::Lawn;
use mow_mower::Mower;
use tracing::debug;

use crate::{ConfigError, ConfigResult};

/// A parsed run: the lawn area plus every mower with its program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MowConfig {
    pub area:   Area,
    pub mowers: Vec<Mower>,
}

impl MowConfig {
    /// A fresh lawn (no plots materialized) over the configured area.
    pub fn lawn(&self) -> Lawn {
        Lawn::with_area(self.area)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a configuration file.
pub fn load_config_path(path: &Path) -> ConfigResult<MowConfig> {
    let file = std::fs::File::open(path)?;
    load_config_reader(file)
}

/// Like [`load_config_path`] but accepts any `Read` source.
pub fn load_config_reader<R: Read>(mut reader: R) -> ConfigResult<MowConfig> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_config(&text)
}

/// Parse configuration text.
pub fn parse_config(text: &str) -> ConfigResult<MowConfig> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header) = lines.next().ok_or(ConfigError::MissingLawn)?;
    let area = parse_lawn(header_line, header)?;

    let mut mowers = Vec::new();
    while let Some((line, start)) = lines.next() {
        let id = MowerId::try_from(mowers.len()).map_err(|_| ConfigError::InvalidMower {
            line,
            text:   start.to_owned(),
            reason: "too many mowers".to_owned(),
        })?;
        let mower = parse_mower(line, start, id)?;

        let (program_line, program) = lines
            .next()
            .ok_or(ConfigError::MissingInstructions { line })?;
        if looks_like_mower(program) {
            return Err(ConfigError::MissingInstructions { line });
        }
        let program = parse_program(program_line, program)?;

        mowers.push(mower.with_program(program));
    }

    debug!(%area, mowers = mowers.len(), "configuration parsed");
    Ok(MowConfig { area, mowers })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_lawn(line: usize, text: &str) -> ConfigResult<Area> {
    let invalid = |reason: String| ConfigError::InvalidLawn {
        line,
        text: text.to_owned(),
        reason,
    };

    // Fields past the height are ignored.
    let mut fields = text.split_whitespace();
    let (Some(width), Some(height)) = (fields.next(), fields.next()) else {
        return Err(invalid("expected width and height".to_owned()));
    };
    let width = width
        .parse::<u32>()
        .map_err(|e| invalid(format!("width {width:?}: {e}")))?;
    let height = height
        .parse::<u32>()
        .map_err(|e| invalid(format!("height {height:?}: {e}")))?;

    Ok(Area::new(width, height))
}

fn parse_mower(line: usize, text: &str, id: MowerId) -> ConfigResult<Mower> {
    let invalid = |reason: String| ConfigError::InvalidMower {
        line,
        text: text.to_owned(),
        reason,
    };

    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[x, y, heading] = fields.as_slice() else {
        return Err(invalid(format!("expected 3 fields, found {}", fields.len())));
    };
    let x = x.parse::<i32>().map_err(|e| invalid(format!("x {x:?}: {e}")))?;
    let y = y.parse::<i32>().map_err(|e| invalid(format!("y {y:?}: {e}")))?;
    let heading = heading
        .parse::<Heading>()
        .map_err(|e| invalid(e.to_string()))?;

    Ok(Mower::new(id, Cell::new(x, y), heading))
}

fn parse_program(line: usize, text: &str) -> ConfigResult<Vec<Move>> {
    text.chars()
        .map(|c| Move::try_from(c).map_err(|_| ConfigError::InvalidInstruction { line, symbol: c }))
        .collect()
}

/// A mower start line where a program was expected.
fn looks_like_mower(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit() || c == '-')
}
