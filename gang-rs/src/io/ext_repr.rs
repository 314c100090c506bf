use serde::{Deserialize, Serialize};

use crate::entities::Shape;

/// A packing job: a named set of designs to be laid out on gang sheets
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtJob {
    /// The name of the job
    pub name: String,
    /// Designs to be produced
    pub designs: Vec<ExtDesign>,
}

/// External representation of a [`DesignRequest`](crate::entities::DesignRequest)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtDesign {
    /// Unique identifier of the design within the job
    pub id: String,
    /// Width of the bounding box in inches
    pub width: f64,
    /// Height of the bounding box in inches
    pub height: f64,
    /// Amount of copies to be produced
    pub quantity: usize,
    /// Human readable name of the design
    pub label: String,
    /// Outline of the design, there is no default
    pub shape: ExtShape,
}

/// Outline of a design
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtShape {
    Box,
    Round,
}

/// External representation of a [`PackedLayout`](crate::entities::PackedLayout)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Width of the roll the sheets are cut from
    pub sheet_width: f64,
    /// Sheets in the order they are cut from the roll
    pub sheets: Vec<ExtSheet>,
    /// Number of sheets used
    pub n_sheets: usize,
    /// Total number of placed designs
    pub n_placed: usize,
    /// Sum of the used heights of all sheets
    pub total_used_height: f64,
    /// Placed bounding box area divided by the area of consumed material
    pub density: f64,
}

/// External representation of a [`PackedSheet`](crate::entities::PackedSheet)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheet {
    /// Position of the sheet on the roll, starting from 0
    pub index: usize,
    /// Length of material consumed by the sheet, trailing margin included
    pub used_height: f64,
    pub density: f64,
    pub placements: Vec<ExtPlacement>,
}

/// External representation of a [`PlacedDesign`](crate::entities::PlacedDesign)
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    /// `{design_id}-{copy_index}`
    pub id: String,
    pub label: String,
    pub shape: ExtShape,
    /// Top-left corner of the bounding box, in sheet coordinates
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<ExtShape> for Shape {
    fn from(shape: ExtShape) -> Self {
        match shape {
            ExtShape::Box => Shape::Box,
            ExtShape::Round => Shape::Round,
        }
    }
}

impl From<Shape> for ExtShape {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Box => ExtShape::Box,
            Shape::Round => ExtShape::Round,
        }
    }
}
