use std::mem;

use log::debug;

use crate::entities::{DesignRequest, DesignUnit, PackedSheet, PlacedDesign};
use crate::error::PackResult;
use crate::pack::expand::{expand_validated, sort_units};
use crate::util::{FPA, SheetConfig, assertions};

/// Greedy row ("shelf") packer for arbitrary rectangles.
/// Always correct, but every row is as tall as its tallest design.
pub fn shelf_pack(requests: &[DesignRequest], config: &SheetConfig) -> PackResult<Vec<PackedSheet>> {
    let mut units = expand_validated(requests, config)?;
    sort_units(&mut units);
    Ok(shelf_pack_units(&units, config))
}

/// Places already validated units, in the given order, in left-to-right rows.
pub(crate) fn shelf_pack_units(units: &[DesignUnit], config: &SheetConfig) -> Vec<PackedSheet> {
    let SheetConfig {
        sheet_width,
        margin,
        max_sheet_length,
    } = *config;

    let mut sheets = vec![];
    let mut cursor = ShelfCursor::new(margin);

    for unit in units {
        if cursor.n_in_row > 0 && FPA(cursor.x + unit.width + margin) > FPA(sheet_width) {
            cursor.close_row();
        }
        if !cursor.placements.is_empty()
            && FPA(cursor.y + unit.height + margin) > FPA(max_sheet_length)
        {
            sheets.push(cursor.finish_sheet());
        }
        cursor.place(unit);
    }
    if !cursor.placements.is_empty() {
        sheets.push(cursor.finish_sheet());
    }

    debug_assert!(sheets.iter().all(|s| assertions::sheet_within_bounds(s, config)));
    debug_assert!(sheets.iter().all(|s| assertions::boxes_separated(s, margin)));
    debug!("[SHELF] packed {} units on {} sheets", units.len(), sheets.len());

    sheets
}

/// Position of the next placement on the sheet currently being filled.
struct ShelfCursor {
    margin: f64,
    x: f64,
    /// top of the current row
    y: f64,
    row_height: f64,
    n_in_row: usize,
    placements: Vec<PlacedDesign>,
}

impl ShelfCursor {
    fn new(margin: f64) -> Self {
        Self {
            margin,
            x: margin,
            y: margin,
            row_height: 0.0,
            n_in_row: 0,
            placements: vec![],
        }
    }

    fn place(&mut self, unit: &DesignUnit) {
        self.placements.push(unit.place(self.x, self.y));
        self.x += unit.width + self.margin;
        self.row_height = f64::max(self.row_height, unit.height);
        self.n_in_row += 1;
    }

    fn close_row(&mut self) {
        self.y += self.row_height + self.margin;
        self.x = self.margin;
        self.row_height = 0.0;
        self.n_in_row = 0;
    }

    /// Hands over the placements of the current sheet and resets the cursor to the top of a fresh one.
    fn finish_sheet(&mut self) -> PackedSheet {
        let placements = mem::take(&mut self.placements);
        *self = ShelfCursor::new(self.margin);
        PackedSheet::enclosing(placements, self.margin)
    }
}
