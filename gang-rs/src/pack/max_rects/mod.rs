mod bin;

#[doc(inline)]
pub use bin::MaxRectsBin;

use log::{debug, info};

use crate::entities::{DesignRequest, DesignUnit, PackedSheet};
use crate::error::PackResult;
use crate::pack::expand::{expand_validated, sort_units};
use crate::pack::shelf::shelf_pack_units;
use crate::util::{FPA, SheetConfig, assertions};

/// Free-rectangle tracking packer (maximal rectangles, Best-Short-Side-Fit) for arbitrary rectangles.
/// Rotation is never applied: printed artwork has a fixed orientation.
///
/// The result is never longer than the [`shelf_pack`](crate::pack::shelf::shelf_pack) layout of the same requests:
/// when Best-Short-Side-Fit loses to it, the shelf layout is returned instead.
pub fn max_rects_pack(
    requests: &[DesignRequest],
    config: &SheetConfig,
) -> PackResult<Vec<PackedSheet>> {
    let units = expand_validated(requests, config)?;
    Ok(max_rects_pack_units(units, config))
}

/// Packs validated units into as many bins as needed.
/// Units are sorted first, then each goes into the first bin with room for it.
///
/// Best-Short-Side-Fit is a heuristic and can occasionally stack narrow units where rows would have been shorter.
/// The shelf layout of the same units is therefore computed as well and returned instead if it consumes less material.
pub(crate) fn max_rects_pack_units(
    mut units: Vec<DesignUnit>,
    config: &SheetConfig,
) -> Vec<PackedSheet> {
    sort_units(&mut units);
    let margin = config.margin;

    let mut bins: Vec<MaxRectsBin> = vec![];
    for unit in &units {
        if !bins.iter_mut().any(|bin| bin.insert(unit)) {
            let mut bin =
                MaxRectsBin::new(config.usable_width(), config.usable_height(), margin);
            let inserted = bin.insert(unit);
            debug_assert!(inserted, "validated unit {} does not fit an empty bin", unit.id);
            bins.push(bin);
        }
    }

    debug_assert!(bins.iter().all(|bin| !bin.is_empty()));
    let sheets = bins
        .into_iter()
        .map(|bin| bin.into_sheet(margin))
        .collect::<Vec<_>>();

    let shelf_sheets = shelf_pack_units(&units, config);
    let used = |sheets: &[PackedSheet]| sheets.iter().map(|s| s.used_height).sum::<f64>();
    if FPA(used(&shelf_sheets)) < FPA(used(&sheets)) {
        info!(
            "[MR] shelf layout is shorter ({:.3}in < {:.3}in), using it instead",
            used(&shelf_sheets),
            used(&sheets)
        );
        return shelf_sheets;
    }

    debug_assert!(sheets.iter().all(|s| assertions::sheet_within_bounds(s, config)));
    debug_assert!(sheets.iter().all(|s| assertions::boxes_separated(s, margin)));
    debug!("[MR] packed {} units on {} sheets", units.len(), sheets.len());

    sheets
}
