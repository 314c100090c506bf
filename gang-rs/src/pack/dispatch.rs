use log::{debug, info, warn};
use ordered_float::OrderedFloat;

use crate::entities::{DesignRequest, DesignUnit, PackedSheet, PlacedDesign, Shape};
use crate::error::PackResult;
use crate::pack::expand::{expand, validate};
use crate::pack::hex::hex_pack_units;
use crate::pack::max_rects::max_rects_pack_units;
use crate::geometry::{Circle, Rect};
use crate::util::{BOUNDS_TOLERANCE, FPA, PackingMode, SheetConfig, assertions, same_row};

/// Routes a job to the packer best suited for its shape composition.
///
/// * [`PackingMode::Clean`]: everything is bin packed as bounding boxes.
/// * [`PackingMode::Tight`] with only uniform circles: hexagonal packing.
/// * [`PackingMode::Tight`] without uniform circles: bin packing.
/// * [`PackingMode::Tight`] with uniform circles and rectangles: circles are hex packed,
///   rectangles are fitted into the leftover space of the last circle row, the rest is bin packed on new sheets.
///
/// The whole request set is validated before any placement is attempted.
pub fn pack_designs(
    requests: &[DesignRequest],
    config: &SheetConfig,
    mode: PackingMode,
) -> PackResult<Vec<PackedSheet>> {
    validate(requests, config)?;

    let (circles, rects): (Vec<&DesignRequest>, Vec<&DesignRequest>) =
        requests.iter().partition(|r| r.shape == Shape::Round);

    for r in circles.iter().filter(|r| r.diameter().is_none()) {
        warn!(
            "[DISP] round design '{}' has a non-square bounding box ({} x {}), it will be packed as a box",
            r.label, r.width, r.height
        );
    }

    let diameter = uniform_circle_diameter(circles.iter().copied());

    let sheets = match (mode, diameter) {
        (PackingMode::Clean, _) | (PackingMode::Tight, None) => {
            debug!("[DISP] {mode:?} mode, bin packing all designs as boxes");
            max_rects_pack_units(expand(requests), config)
        }
        (PackingMode::Tight, Some(_)) if rects.is_empty() => {
            debug!("[DISP] uniform circles only, hex packing");
            hex_pack_units(&expand(circles), config)
        }
        (PackingMode::Tight, Some(diameter)) => {
            debug!("[DISP] uniform circles (d: {diameter}) mixed with boxes, hybrid packing");
            hybrid_pack(&circles, &rects, diameter, config)
        }
    };

    info!(
        "[DISP] packed {} designs on {} sheets ({:.3}in of material)",
        sheets.iter().map(|s| s.len()).sum::<usize>(),
        sheets.len(),
        sheets.iter().map(|s| s.used_height).sum::<f64>()
    );

    Ok(sheets)
}

/// The common diameter of the given requests, if there is at least one,
/// all of them are proper circles and all diameters are equal.
pub fn uniform_circle_diameter<'a>(
    circles: impl IntoIterator<Item = &'a DesignRequest>,
) -> Option<f64> {
    let diameters = circles
        .into_iter()
        .map(|c| c.diameter())
        .collect::<Option<Vec<f64>>>()?;

    let first = *diameters.first()?;
    diameters
        .iter()
        .all(|d| FPA(*d) == FPA(first))
        .then_some(first)
}

/// Hex packs the circles, then fits as many rectangles as possible in the last row of the last circle sheet.
/// Rectangles that do not fit there are bin packed on sheets appended after the circle sheets.
fn hybrid_pack(
    circles: &[&DesignRequest],
    rects: &[&DesignRequest],
    diameter: f64,
    config: &SheetConfig,
) -> Vec<PackedSheet> {
    let mut sheets = hex_pack_units(&expand(circles.iter().copied()), config);
    let rect_units = expand(rects.iter().copied());

    let overflow = match sheets.last_mut() {
        Some(last) if !last.is_empty() => fill_last_row_gap(last, rect_units, diameter, config),
        _ => rect_units,
    };

    debug!("[DISP] {} boxes bin packed after the circle sheets", overflow.len());
    if !overflow.is_empty() {
        sheets.extend(max_rects_pack_units(overflow, config));
    }
    sheets
}

/// Places units right-aligned, right to left, in the row of the rightmost circle of the sheet's last row.
/// Only units no taller than a circle fit in the row, and only if they keep `margin` from every circle on the sheet:
/// with thin margins the row pitch is smaller than the diameter and a box in the last row can reach into the row above.
/// Returns the units that were not placed.
///
/// Neither earlier rows nor earlier sheets are considered for backfilling.
/// The sheet's used height is unchanged as every placed unit stays within the row.
fn fill_last_row_gap(
    sheet: &mut PackedSheet,
    units: Vec<DesignUnit>,
    diameter: f64,
    config: &SheetConfig,
) -> Vec<DesignUnit> {
    let Some(rightmost) = last_row_rightmost(&sheet.placements) else {
        return units;
    };
    let margin = config.margin;
    //leftmost position a box may start at without crowding the circle
    let gap_boundary = rightmost.x + rightmost.width + margin;
    let row_y = rightmost.y;

    let circles = sheet
        .placements
        .iter()
        .filter_map(|p| p.circle())
        .collect::<Vec<Circle>>();
    let clear_of_circles = |bbox: &Rect| {
        circles
            .iter()
            .all(|c| c.gap_to_rect(bbox) >= margin - BOUNDS_TOLERANCE)
    };

    let mut cursor = config.sheet_width - margin;
    let mut fitted = vec![];
    let mut overflow = vec![];
    for unit in units {
        let x = cursor - unit.width;
        if FPA(x) >= FPA(gap_boundary)
            && FPA(unit.height) <= FPA(diameter)
            && clear_of_circles(&Rect::new(x, row_y, unit.width, unit.height))
        {
            fitted.push(unit.place(x, row_y));
            cursor = x - margin;
        } else {
            overflow.push(unit);
        }
    }

    debug!(
        "[DISP] fitted {} boxes next to the last circle row (y: {row_y:.3}, gap starts at x: {gap_boundary:.3})",
        fitted.len()
    );
    sheet.placements.extend(fitted);
    debug_assert!(assertions::circles_clear_of_boxes(sheet, margin));
    overflow
}

/// The placement with the greatest x among those in the lowest row (greatest y).
fn last_row_rightmost(placements: &[PlacedDesign]) -> Option<&PlacedDesign> {
    let last_row_y = placements.iter().map(|p| p.y).reduce(f64::max)?;
    placements
        .iter()
        .filter(|p| same_row(p.y, last_row_y))
        .max_by_key(|p| OrderedFloat(p.x))
}
