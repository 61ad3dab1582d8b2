//! beamcentre CLI
//!
//! Prints instrument search defaults and dry-runs a beam centre search plan.
#![allow(clippy::uninlined_format_args)]

mod dry_run;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use beamcentre_core::{Instrument, ReductionState};
use beamcentre_model::CentreSearchSettings;
use clap::{Parser, Subcommand};
use log::info;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Search error: {0}")]
    Model(#[from] beamcentre_model::Error),
}

/// Beam centre search inspection tool.
#[derive(Parser)]
#[command(name = "beamcentre")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default search settings of an instrument as JSON
    Defaults {
        /// Instrument name (LOQ, LARMOR, SANS2D, ZOOM)
        #[arg(short, long, value_parser = parse_instrument)]
        instrument: Option<Instrument>,
    },

    /// Dry-run a search and print every centre finder invocation as JSON
    Plan {
        /// Instrument name (LOQ, LARMOR, SANS2D, ZOOM)
        #[arg(short, long, value_parser = parse_instrument)]
        instrument: Option<Instrument>,

        /// Settings JSON file; replaces the instrument defaults, only the
        /// axis scales follow --instrument
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Run a centre-of-mass pass before the refined search
        #[arg(long)]
        com: bool,

        /// Forward the finder's diagnostic output
        #[arg(short, long)]
        verbose: bool,

        /// Do not search along the vertical axis
        #[arg(long)]
        no_up_down: bool,

        /// Do not search along the horizontal axis
        #[arg(long)]
        no_left_right: bool,

        /// LAB start position on the first axis
        #[arg(long, allow_hyphen_values = true)]
        lab_pos1: Option<f64>,

        /// LAB start position on the second axis
        #[arg(long, allow_hyphen_values = true)]
        lab_pos2: Option<f64>,
    },
}

fn parse_instrument(value: &str) -> std::result::Result<Instrument, beamcentre_core::Error> {
    value.parse()
}

/// Reads search settings from a JSON file. Missing fields take the generic
/// defaults.
fn load_settings(path: &Path) -> Result<CentreSearchSettings> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Defaults { instrument } => {
            let settings = CentreSearchSettings::for_instrument(instrument);
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }

        Commands::Plan {
            instrument,
            settings,
            com,
            verbose,
            no_up_down,
            no_left_right,
            lab_pos1,
            lab_pos2,
        } => {
            let mut search = match &settings {
                Some(path) => {
                    info!("Loading settings from {}", path.display());
                    let mut loaded = load_settings(path)?;
                    loaded.set_scaling(instrument);
                    loaded
                }
                None => CentreSearchSettings::for_instrument(instrument),
            };

            search.com |= com;
            search.verbose |= verbose;
            search.up_down &= !no_up_down;
            search.left_right &= !no_left_right;
            if lab_pos1.is_some() {
                search.lab_pos_1 = lab_pos1;
            }
            if lab_pos2.is_some() {
                search.lab_pos_2 = lab_pos2;
            }

            let report = dry_run::plan(search, ReductionState::new(instrument))?;
            info!(
                "Dry run issued {} centre finder request(s)",
                report.requests.len()
            );
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
