//! mow — runs a lawn configuration and reports final mower positions.
//!
//! ```text
//! $ mow lawn.txt
//! 1 3 N
//! 5 1 E
//! ```

mod logging;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use mow_config::load_config_path;
use mow_output::{CsvWriter, TextWriter, write_report};
use mow_sim::{Dispatch, FleetBuilder};

use logging::LoggingObserver;

#[derive(Parser)]
#[command(name = "mow", version, about = "Run mowers concurrently on a lawn and print where they end up")]
struct Cli {
    /// Configuration file: lawn header, then mower / instruction line pairs.
    config: PathBuf,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// How mowers are mapped onto units of concurrency.
    #[arg(short, long, value_enum, default_value_t = DispatchArg::Threads)]
    dispatch: DispatchArg,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Format {
    /// `<x> <y> <heading>` per mower.
    Text,
    /// `mower_id,x,y,heading` with a header row.
    Csv,
}

#[derive(Copy, Clone, ValueEnum)]
enum DispatchArg {
    /// One OS thread per mower.
    Threads,
    /// Rayon thread pool.
    Pool,
}

impl From<DispatchArg> for Dispatch {
    fn from(arg: DispatchArg) -> Self {
        match arg {
            DispatchArg::Threads => Dispatch::Threads,
            DispatchArg::Pool    => Dispatch::Pool,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config_path(&cli.config)
        .with_context(|| format!("load configuration {}", cli.config.display()))?;

    let mut fleet = FleetBuilder::new(config.lawn())
        .mowers(config.mowers)
        .dispatch(cli.dispatch.into())
        .build()?;
    fleet.run(&LoggingObserver);

    let sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create report {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        Format::Text => write_report(&mut TextWriter::new(sink), fleet.mowers())?,
        Format::Csv  => write_report(&mut CsvWriter::new(sink)?, fleet.mowers())?,
    }
    Ok(())
}
