use serde::{Deserialize, Serialize};

use crate::error::{PackError, PackResult};

/// Dimensions of the roll material and the spacing required around every design.
/// All values are in inches.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct SheetConfig {
    /// Fixed width of the roll
    pub sheet_width: f64,
    /// Required gap from the sheet edges and between neighbouring designs
    pub margin: f64,
    /// Maximum usable length of a single sheet cut from the roll
    pub max_sheet_length: f64,
}

impl SheetConfig {
    pub fn new(sheet_width: f64, margin: f64, max_sheet_length: f64) -> Self {
        Self {
            sheet_width,
            margin,
            max_sheet_length,
        }
    }

    /// Width available for designs once the side margins are taken off
    pub fn usable_width(&self) -> f64 {
        self.sheet_width - 2.0 * self.margin
    }

    /// Length available for designs once the top and bottom margins are taken off
    pub fn usable_height(&self) -> f64 {
        self.max_sheet_length - 2.0 * self.margin
    }

    /// Rejects configurations which leave no room for any design.
    pub fn validate(&self) -> PackResult<()> {
        let SheetConfig {
            sheet_width,
            margin,
            max_sheet_length,
        } = *self;

        if !(margin.is_finite() && margin >= 0.0) {
            return Err(PackError::InvalidSheetConfig(format!(
                "margin must be a finite, non-negative number, got {margin}"
            )));
        }
        if !(sheet_width.is_finite() && self.usable_width() > 0.0) {
            return Err(PackError::InvalidSheetConfig(format!(
                "sheet width of {sheet_width}in leaves no usable width with a margin of {margin}in"
            )));
        }
        if !(max_sheet_length.is_finite() && self.usable_height() > 0.0) {
            return Err(PackError::InvalidSheetConfig(format!(
                "max sheet length of {max_sheet_length}in leaves no usable length with a margin of {margin}in"
            )));
        }
        Ok(())
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            sheet_width: 22.0,
            margin: 1.0,
            max_sheet_length: 60.0,
        }
    }
}

/// Trade-off between material usage and visual regularity of the layout.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PackingMode {
    /// Hexagonal packing for uniform circles, maximizing density
    #[default]
    Tight,
    /// Every design is treated as its bounding box, producing a more uniform grid
    Clean,
}
