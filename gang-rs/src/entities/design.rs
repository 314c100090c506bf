use crate::util::FPA;

/// Outline of a printed design.
/// Packers reason about the axis-aligned bounding box, `Round` additionally allows hexagonal packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Box,
    Round,
}

/// A design type to be packed, requested in some quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignRequest {
    pub id: String,
    /// Width of the bounding box, in inches
    pub width: f64,
    /// Height of the bounding box, in inches
    pub height: f64,
    /// Number of physical copies to place
    pub quantity: usize,
    /// Display label, used to identify the design in error messages
    pub label: String,
    pub shape: Shape,
}

impl DesignRequest {
    pub fn new(
        id: impl Into<String>,
        width: f64,
        height: f64,
        quantity: usize,
        label: impl Into<String>,
        shape: Shape,
    ) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            quantity,
            label: label.into(),
            shape,
        }
    }

    /// Diameter of the design if it is a proper circle (round with a square bounding box).
    pub fn diameter(&self) -> Option<f64> {
        match self.shape == Shape::Round && FPA(self.width) == FPA(self.height) {
            true => Some(self.width),
            false => None,
        }
    }

    /// Bounding box area of a single copy
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
