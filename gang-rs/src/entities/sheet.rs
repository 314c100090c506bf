use crate::entities::PlacedDesign;

/// A single sheet cut from the roll, holding its placements in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PackedSheet {
    pub placements: Vec<PlacedDesign>,
    /// Length of material consumed by the sheet, trailing margin included
    pub used_height: f64,
}

impl PackedSheet {
    pub fn new(placements: Vec<PlacedDesign>, used_height: f64) -> Self {
        Self {
            placements,
            used_height,
        }
    }

    /// Creates a sheet whose used height is the lowest extent of its placements plus `margin`.
    pub fn enclosing(placements: Vec<PlacedDesign>, margin: f64) -> Self {
        let bottom = placements
            .iter()
            .map(|p| p.y + p.height)
            .fold(0.0, f64::max);
        Self::new(placements, bottom + margin)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Sum of the bounding box areas of all placements
    pub fn placed_area(&self) -> f64 {
        self.placements.iter().map(|p| p.area()).sum()
    }

    /// Fraction of the consumed material covered by design bounding boxes
    pub fn density(&self, sheet_width: f64) -> f64 {
        let material = sheet_width * self.used_height;
        match material > 0.0 {
            true => self.placed_area() / material,
            false => 0.0,
        }
    }
}
