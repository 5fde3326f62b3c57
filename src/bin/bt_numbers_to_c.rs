//! bt-numbers-to-c: Convert Bluetooth assigned numbers into a C header
//!
//! Usage:
//!   # Fetch from the Nordic bluetooth-numbers-database, write bt_assigned_numbers.h
//!   bt-numbers-to-c
//!
//!   # Use a local checkout of the database's v1 directory
//!   bt-numbers-to-c --input-dir bluetooth-numbers-database/v1 -o include/bt_numbers.h
//!
//!   # Reproducible output on stdout
//!   bt-numbers-to-c --input-dir v1 --timestamp "release 1.2" --stdout

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use bt_assigned_numbers::{GeneratorConfig, OutputTarget, SourceConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bt-numbers-to-c")]
#[command(about = "Convert Bluetooth SIG assigned numbers into a C header", long_about = None)]
struct Args {
    /// Read the JSON documents from this directory instead of fetching them
    #[arg(long, value_name = "DIR", conflicts_with = "base_url")]
    input_dir: Option<PathBuf>,

    /// Base URL the JSON documents are fetched from
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Output header file (default: bt_assigned_numbers.h)
    #[arg(long, short = 'o', value_name = "FILE", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Write the header to stdout instead of a file
    #[arg(long)]
    stdout: bool,

    /// Fixed text for the header timestamp line (default: current local time)
    #[arg(long)]
    timestamp: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Build config
    let mut config = GeneratorConfig::default();
    if let Some(path) = args.input_dir {
        config.source = SourceConfig::Directory { path };
    } else if let Some(base_url) = args.base_url {
        config.source = SourceConfig::Remote { base_url };
    }
    if args.stdout {
        config.output = OutputTarget::Stdout;
    } else if let Some(path) = args.output {
        config.output = OutputTarget::File(path);
    }
    config.timestamp = args.timestamp;

    let artifact = bt_assigned_numbers::run(&config)?;

    let rows: usize = artifact.tables.iter().map(|t| t.count()).sum();
    match &config.output {
        OutputTarget::File(path) => info!(path = %path.display(), tables = artifact.tables.len(), rows, "header written"),
        OutputTarget::Stdout => info!(tables = artifact.tables.len(), rows, "header written to stdout"),
    }

    Ok(())
}
