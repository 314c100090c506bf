use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::DesignRequest;
use crate::io::ext_repr::{ExtDesign, ExtJob};

/// Imports the designs of a job into the library
pub fn import(ext_job: &ExtJob) -> Result<Vec<DesignRequest>> {
    let duplicates = ext_job
        .designs
        .iter()
        .map(|d| d.id.as_str())
        .duplicates()
        .collect_vec();
    ensure!(
        duplicates.is_empty(),
        "design ids should be unique within a job, duplicated: {duplicates:?}"
    );

    Ok(ext_job.designs.iter().map(import_design).collect_vec())
}

pub fn import_design(ext_design: &ExtDesign) -> DesignRequest {
    DesignRequest::new(
        ext_design.id.clone(),
        ext_design.width,
        ext_design.height,
        ext_design.quantity,
        ext_design.label.clone(),
        ext_design.shape.into(),
    )
}
