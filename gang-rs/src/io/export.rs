use itertools::Itertools;

use crate::entities::{PackedLayout, PackedSheet, PlacedDesign};
use crate::io::ext_repr::{ExtPlacement, ExtSheet, ExtSolution};

/// Exports a layout out of the library
pub fn export(layout: &PackedLayout) -> ExtSolution {
    ExtSolution {
        sheet_width: layout.sheet_width,
        sheets: layout
            .sheets
            .iter()
            .enumerate()
            .map(|(index, sheet)| export_sheet(index, sheet, layout.sheet_width))
            .collect_vec(),
        n_sheets: layout.n_sheets(),
        n_placed: layout.n_placed(),
        total_used_height: layout.total_used_height(),
        density: layout.density(),
    }
}

pub fn export_sheet(index: usize, sheet: &PackedSheet, sheet_width: f64) -> ExtSheet {
    ExtSheet {
        index,
        used_height: sheet.used_height,
        density: sheet.density(sheet_width),
        placements: sheet.placements.iter().map(export_placement).collect_vec(),
    }
}

pub fn export_placement(placed: &PlacedDesign) -> ExtPlacement {
    ExtPlacement {
        id: placed.id.clone(),
        label: placed.label.clone(),
        shape: placed.shape.into(),
        x: placed.x,
        y: placed.y,
        width: placed.width,
        height: placed.height,
    }
}
