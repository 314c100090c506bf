use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use gang_rs::io::ext_repr::ExtJob;
use log::{LevelFilter, info};
use serde::Serialize;

use crate::EPOCH;
use crate::config::GSPConfig;

pub mod cli;
pub mod output;

pub fn read_job(path: &Path) -> Result<ExtJob> {
    let file = File::open(path)
        .with_context(|| format!("could not open job file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse job file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<GSPConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "solution written to {:?}",
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    //elapsed times are relative to the logger's initialization
    LazyLock::force(&EPOCH);
    fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed().as_secs();
            let (h, m, s) = (elapsed / 3600, elapsed / 60 % 60, elapsed % 60);
            let thread = std::thread::current();

            let prefix = format!(
                "[{}] [{h:0>2}:{m:0>2}:{s:0>2}] <{}>",
                record.level(),
                thread.name().unwrap_or("-"),
            );
            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;

    info!("[GSP] logger initialized at level {level_filter}");
    Ok(())
}
