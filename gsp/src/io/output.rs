use gang_rs::io::ext_repr::{ExtJob, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::GSPConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GSPOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    pub solution: ExtSolution,
    pub config: GSPConfig,
}
