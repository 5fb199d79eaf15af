//! mnist2fits CLI entry point.
//!
//! Initializes logging, parses arguments, loads the MNIST dataset and writes
//! the selected samples as single-HDU FITS files.

use astro_dataprep::export::{export_dataset, ExportOptions};
use astro_dataprep::mnist::load_dataset;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Export MNIST digit images as individual FITS files.
#[derive(Parser, Debug)]
#[command(name = "mnist2fits")]
#[command(about = "Convert MNIST digit images to single-HDU FITS files")]
#[command(version)]
struct Args {
    /// Digit class to be read and converted to FITS (-1 = all).
    #[arg(long, default_value_t = -1)]
    selclass: i64,

    /// Max number of images to be read (-1 = all).
    #[arg(long, default_value_t = -1)]
    nmax: i64,

    /// Read the test split instead of the training split.
    #[arg(long, alias = "read_test")]
    read_test: bool,

    /// Directory holding the pre-downloaded MNIST IDX files.
    #[arg(long, default_value = "data")]
    datadir: PathBuf,

    /// Directory receiving the FITS files.
    #[arg(long, default_value = ".")]
    outdir: PathBuf,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap prints its own usage/error text
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    init_tracing(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("mnist2fits failed: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(log_level: &str) {
    // Priority: RUST_LOG env var > --log-level CLI arg > default "info"
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)))
        .init();
}

fn run(args: &Args) -> anyhow::Result<()> {
    info!("Loading MNIST dataset from {} ...", args.datadir.display());
    let dataset = load_dataset(&args.datadir)?;

    fs::create_dir_all(&args.outdir)?;

    let opts = ExportOptions {
        sel_class: args.selclass,
        nmax: args.nmax,
        read_test: args.read_test,
        out_dir: args.outdir.clone(),
    };
    let exported = export_dataset(&dataset, &opts)?;

    info!("Exported {exported} images to {}", args.outdir.display());
    Ok(())
}
