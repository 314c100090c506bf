use std::mem;

use log::{debug, trace};

use crate::entities::{DesignRequest, DesignUnit, PackedSheet, Shape};
use crate::error::PackResult;
use crate::pack::expand::expand_validated;
use crate::util::{FPA, SheetConfig, assertions};

/// Hexagonal (honeycomb) packer for round designs of a single diameter.
///
/// Odd rows are shifted by half the column spacing so they nestle into the gaps of the row above,
/// which needs less height than stacking circles in square rows.
/// The caller is responsible for only passing uniform circles, see [`pack_designs`](crate::pack::dispatch::pack_designs).
pub fn hex_pack_circles(
    requests: &[DesignRequest],
    config: &SheetConfig,
) -> PackResult<Vec<PackedSheet>> {
    let units = expand_validated(requests, config)?;
    Ok(hex_pack_units(&units, config))
}

pub(crate) fn hex_pack_units(units: &[DesignUnit], config: &SheetConfig) -> Vec<PackedSheet> {
    let Some(diameter) = units.iter().map(|u| u.width).reduce(f64::max) else {
        return vec![];
    };
    debug_assert!(
        units.iter().all(|u| u.shape == Shape::Round
            && FPA(u.width) == FPA(diameter)
            && FPA(u.height) == FPA(diameter)),
        "hex packing requires uniform circles"
    );

    let grid = HexGrid::new(diameter, config);
    let radius = grid.radius;
    let SheetConfig {
        margin,
        max_sheet_length,
        ..
    } = *config;

    let mut sheets = vec![];
    let mut placements = vec![];
    let mut remaining = units.iter();
    let mut row = 0;
    //center of the last row which actually received a placement
    let mut last_cy: Option<f64> = None;

    while remaining.len() > 0 {
        let cy = grid.row_center_y(row);
        //the first row of a sheet always fits, the validator guarantees it
        if row > 0 && FPA(cy + radius + margin) > FPA(max_sheet_length) {
            if let Some(last_cy) = last_cy.take() {
                sheets.push(PackedSheet::new(
                    mem::take(&mut placements),
                    last_cy + radius + margin,
                ));
            }
            row = 0;
            continue;
        }

        let mut n_placed = 0;
        for (cx, unit) in grid.row_centers_x(row).zip(remaining.by_ref()) {
            placements.push(unit.place(cx - radius, cy - radius));
            n_placed += 1;
        }
        trace!("[HEX] row {row} (cy: {cy:.3}) received {n_placed} circles");
        debug_assert!(row % 2 == 1 || n_placed > 0 || remaining.len() == 0);

        if n_placed > 0 {
            last_cy = Some(cy);
        }
        row += 1;
    }
    if let Some(last_cy) = last_cy {
        sheets.push(PackedSheet::new(placements, last_cy + radius + margin));
    }

    debug_assert!(sheets.iter().all(|s| assertions::sheet_within_bounds(s, config)));
    debug_assert!(sheets.iter().all(|s| assertions::circles_separated(s, margin)));
    debug!(
        "[HEX] packed {} circles (d: {diameter}) on {} sheets",
        units.len(),
        sheets.len()
    );

    sheets
}

/// Geometry of a honeycomb of circles on a sheet.
#[derive(Debug, Clone, Copy)]
pub struct HexGrid {
    pub radius: f64,
    /// Center-to-center distance between neighbours in the same row.
    /// The margin is a gap between circle edges, not between bounding boxes.
    pub col_spacing: f64,
    /// Center-to-center distance between adjacent rows
    pub row_pitch: f64,
    margin: f64,
    sheet_width: f64,
}

impl HexGrid {
    pub fn new(diameter: f64, config: &SheetConfig) -> Self {
        let col_spacing = diameter + config.margin;
        Self {
            radius: diameter / 2.0,
            col_spacing,
            //closest vertical spacing at which the lateral surface gap is still respected
            row_pitch: col_spacing * 3.0_f64.sqrt() / 2.0,
            margin: config.margin,
            sheet_width: config.sheet_width,
        }
    }

    /// Vertical center of the `row`-th row on a sheet
    pub fn row_center_y(&self, row: usize) -> f64 {
        self.margin + self.radius + row as f64 * self.row_pitch
    }

    /// Horizontal centers of all circles fitting in the `row`-th row, left to right.
    /// Odd rows are offset by half a column.
    pub fn row_centers_x(&self, row: usize) -> impl Iterator<Item = f64> {
        let offset = match row % 2 {
            0 => 0.0,
            _ => self.col_spacing / 2.0,
        };
        let first = self.margin + self.radius + offset;
        let last = self.sheet_width - self.margin - self.radius;
        let col_spacing = self.col_spacing;

        (0_u32..)
            .map(move |i| first + i as f64 * col_spacing)
            .take_while(move |cx| FPA(*cx) <= FPA(last))
    }
}
