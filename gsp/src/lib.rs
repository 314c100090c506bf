use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use gang_rs::io::ext_repr::ExtJob;
use gang_rs::io::{export, import};
use log::info;
use thousands::Separable;

use crate::config::GSPConfig;
use crate::io::output::GSPOutput;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Imports the job, packs it according to the config and bundles everything into a [`GSPOutput`].
pub fn solve(ext_job: ExtJob, config: GSPConfig) -> Result<GSPOutput> {
    let requests = import::import(&ext_job)?;
    let n_units = requests.iter().map(|r| r.quantity).sum::<usize>();
    info!(
        "[GSP] packing job '{}': {} designs, {} copies, strategy {:?}, mode {:?}",
        ext_job.name,
        requests.len(),
        n_units.separate_with_commas(),
        config.strategy,
        config.mode
    );

    let start = Instant::now();
    let layout = config.strategy.pack(&requests, &config.sheet, config.mode)?;

    info!(
        "[GSP] packed {} designs on {} sheets in {:.3}ms, {:.2}in of material used with a density of {:.3}%",
        layout.n_placed().separate_with_commas(),
        layout.n_sheets(),
        start.elapsed().as_secs_f64() * 1000.0,
        layout.total_used_height(),
        layout.density() * 100.0
    );

    Ok(GSPOutput {
        job: ext_job,
        solution: export::export(&layout),
        config,
    })
}
