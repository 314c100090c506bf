use gang_rs::pack::Strategy;
use gang_rs::util::{PackingMode, SheetConfig};
use serde::{Deserialize, Serialize};

/// Configuration for the gang sheet packer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct GSPConfig {
    /// Dimensions of the roll and the required margin around designs
    pub sheet: SheetConfig,
    /// Density versus regularity trade-off, used by the dispatching strategy
    pub mode: PackingMode,
    /// Which packer to use
    pub strategy: Strategy,
}
