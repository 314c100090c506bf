use crate::entities::PackedSheet;

/// The outcome of a packing run: an ordered list of sheets on a roll of a given width.
/// Sheets are ordered the way the material would be cut.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedLayout {
    pub sheet_width: f64,
    pub sheets: Vec<PackedSheet>,
}

impl PackedLayout {
    pub fn new(sheet_width: f64, sheets: Vec<PackedSheet>) -> Self {
        Self {
            sheet_width,
            sheets,
        }
    }

    pub fn n_sheets(&self) -> usize {
        self.sheets.len()
    }

    pub fn n_placed(&self) -> usize {
        self.sheets.iter().map(|s| s.len()).sum()
    }

    /// Total length of roll consumed by all sheets
    pub fn total_used_height(&self) -> f64 {
        self.sheets.iter().map(|s| s.used_height).sum()
    }

    /// Placed bounding box area divided by the area of all consumed material
    pub fn density(&self) -> f64 {
        let material = self.sheet_width * self.total_used_height();
        match material > 0.0 {
            true => self.sheets.iter().map(|s| s.placed_area()).sum::<f64>() / material,
            false => 0.0,
        }
    }
}
