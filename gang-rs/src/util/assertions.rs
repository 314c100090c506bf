use itertools::Itertools;
use log::error;

use crate::entities::{DesignRequest, PackedSheet};
use crate::util::{BOUNDS_TOLERANCE, FPA, SheetConfig};

//Various checks to verify correctness of packed sheets
//Used in debug_assert!() blocks and in tests

/// Every placement respects the margin to the left, top and right sheet edges, and the max sheet length.
pub fn sheet_within_bounds(sheet: &PackedSheet, config: &SheetConfig) -> bool {
    let SheetConfig {
        sheet_width,
        margin,
        max_sheet_length,
    } = *config;

    let outside = sheet.placements.iter().find(|p| {
        FPA(p.x) < FPA(margin)
            || FPA(p.y) < FPA(margin)
            || FPA(p.x + p.width) > FPA(sheet_width - margin)
            || FPA(p.y + p.height) > FPA(max_sheet_length - margin)
    });
    if let Some(p) = outside {
        error!("placement {} out of bounds: {p:?}", p.id);
        return false;
    }
    FPA(sheet.used_height) <= FPA(max_sheet_length)
}

/// No two bounding boxes on the sheet are closer than `margin`.
pub fn boxes_separated(sheet: &PackedSheet, margin: f64) -> bool {
    let crowded = sheet
        .placements
        .iter()
        .tuple_combinations()
        .find(|(p1, p2)| p1.bbox().gap(&p2.bbox()) < margin - BOUNDS_TOLERANCE);
    if let Some((p1, p2)) = crowded {
        error!("placements {} and {} are closer than {margin}", p1.id, p2.id);
        return false;
    }
    true
}

/// No two round placements on the sheet have edges closer than `margin`.
pub fn circles_separated(sheet: &PackedSheet, margin: f64) -> bool {
    let circles = sheet
        .placements
        .iter()
        .filter_map(|p| p.circle().map(|c| (p, c)))
        .collect_vec();

    let crowded = circles
        .iter()
        .tuple_combinations()
        .find(|((_, c1), (_, c2))| c1.surface_gap(c2) < margin - BOUNDS_TOLERANCE);
    if let Some(((p1, _), (p2, _))) = crowded {
        error!("circles {} and {} are closer than {margin}", p1.id, p2.id);
        return false;
    }
    true
}

/// No box placement on the sheet comes closer than `margin` to the edge of a round placement.
pub fn circles_clear_of_boxes(sheet: &PackedSheet, margin: f64) -> bool {
    let (circles, boxes): (Vec<_>, Vec<_>) = sheet
        .placements
        .iter()
        .partition(|p| p.circle().is_some());

    let crowded = circles.iter().cartesian_product(boxes.iter()).find(|(c, b)| {
        c.circle()
            .is_some_and(|circle| circle.gap_to_rect(&b.bbox()) < margin - BOUNDS_TOLERANCE)
    });
    if let Some((c, b)) = crowded {
        error!("box {} is closer than {margin} to circle {}", b.id, c.id);
        return false;
    }
    true
}

/// The sheets hold exactly one placement per requested copy, each with a unique id.
pub fn placements_conserved(requests: &[DesignRequest], sheets: &[PackedSheet]) -> bool {
    let requested: usize = requests.iter().map(|r| r.quantity).sum();
    let ids = sheets
        .iter()
        .flat_map(|s| s.placements.iter().map(|p| p.id.as_str()))
        .collect_vec();

    ids.len() == requested && ids.iter().all_unique()
}
