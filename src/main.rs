// src/main.rs

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use bplus_index::{run_script, RecordIndex};

/// Runs an index command script against a CSV data file.
#[derive(Debug, Parser)]
#[command(name = "bplus-index", version)]
struct Cli {
    /// Command script, starting with an FLH/<order> header.
    #[arg(long, default_value = "in.txt")]
    input: PathBuf,

    /// Where the result lines are written.
    #[arg(long, default_value = "out.txt")]
    output: PathBuf,

    /// CSV data file whose first column holds the record keys.
    #[arg(long, default_value = "vinhos.csv")]
    data: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let script = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading script {}", cli.input.display()))?;
    let records = RecordIndex::open(&cli.data)
        .with_context(|| format!("indexing data file {}", cli.data.display()))?;
    info!("indexed {} records from {}", records.len(), cli.data.display());

    let output = run_script(&script, &records)?;

    let mut contents = output.join("\n");
    contents.push('\n');
    fs::write(&cli.output, contents)
        .with_context(|| format!("writing results to {}", cli.output.display()))?;

    info!("wrote {} lines to {}", output.len(), cli.output.display());
    Ok(())
}
