use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gsp::config::GSPConfig;
use gsp::io;
use gsp::io::cli::Cli;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GSPConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy.into();
    }
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }

    info!("Successfully parsed GSPConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file should have a valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_job = io::read_job(&args.input_file)?;
    let output = gsp::solve(ext_job, config)?;

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, &solution_path)
}
