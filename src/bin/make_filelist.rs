//! make-filelist CLI entry point.
//!
//! Initializes logging, parses arguments and builds the JSON file-list
//! manifest.

use astro_dataprep::filelist::{build_manifest, parse_pattern_list, FilelistOptions};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build a JSON manifest of image files found under a directory tree.
#[derive(Parser, Debug)]
#[command(name = "make-filelist")]
#[command(about = "Build a JSON file-list manifest for image classification")]
#[command(version)]
struct Args {
    /// File extension to be placed in the list.
    #[arg(long, default_value = "fits")]
    fileext: String,

    /// Directory where the file search starts.
    #[arg(long, default_value = ".")]
    rootdir: PathBuf,

    /// Filename prefix filter.
    #[arg(long, default_value = "")]
    fileprefix: String,

    /// Filename suffix filter (before the extension).
    #[arg(long, default_value = "")]
    filesubfix: String,

    /// Comma-separated patterns stripped from the base filename to derive
    /// the source name.
    #[arg(long, alias = "sname_strip_patterns", default_value = "")]
    sname_strip_patterns: String,

    /// Comma-separated patterns; files whose path contains any of them are
    /// excluded.
    #[arg(long, alias = "exclude_patterns", default_value = "")]
    exclude_patterns: String,

    /// Search recursively down from the root directory.
    #[arg(long)]
    recursive: bool,

    /// Output manifest file name.
    #[arg(long, default_value = "filelist.json")]
    outfile: PathBuf,

    /// Class label assigned to each image.
    #[arg(long, alias = "class_label", default_value = "UNKNOWN")]
    class_label: String,

    /// Class id assigned to each image (-1 = unknown).
    #[arg(long, alias = "class_id", default_value_t = -1)]
    class_id: i64,

    /// Normalizable flag (1/0).
    #[arg(
        long,
        alias = "normalizable_flag",
        default_value_t = 1,
        value_parser = clap::value_parser!(i32).range(0..=1)
    )]
    normalizable_flag: i32,

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
            error!("make-filelist failed: {err:#}");
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
    let opts = FilelistOptions {
        file_ext: args.fileext.clone(),
        root_dir: args.rootdir.clone(),
        file_prefix: args.fileprefix.clone(),
        file_subfix: args.filesubfix.clone(),
        recursive: args.recursive,
        sname_strip_patterns: parse_pattern_list(&args.sname_strip_patterns),
        exclude_patterns: parse_pattern_list(&args.exclude_patterns),
        class_id: args.class_id,
        class_label: args.class_label.clone(),
        normalizable_flag: args.normalizable_flag,
    };

    let manifest = build_manifest(&opts)?;

    info!(
        "Saving json datalist with {} entries to {} ...",
        manifest.data.len(),
        args.outfile.display()
    );
    manifest.write(&args.outfile)?;
    Ok(())
}
