use crate::entities::{DesignRequest, PlacedDesign, Shape};

/// A single physical copy of a [`DesignRequest`], ready to be placed on a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignUnit {
    /// `{request_id}-{index}`, unique within a packing run
    pub id: String,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub shape: Shape,
}

impl DesignUnit {
    pub fn new(request: &DesignRequest, index: usize) -> Self {
        Self {
            id: format!("{}-{}", request.id, index),
            width: request.width,
            height: request.height,
            label: request.label.clone(),
            shape: request.shape,
        }
    }

    /// Places the unit with its top-left corner at `(x, y)` in sheet coordinates.
    pub fn place(&self, x: f64, y: f64) -> PlacedDesign {
        PlacedDesign {
            id: self.id.clone(),
            x,
            y,
            width: self.width,
            height: self.height,
            label: self.label.clone(),
            shape: self.shape,
        }
    }
}
