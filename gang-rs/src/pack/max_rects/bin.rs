use itertools::Itertools;
use log::trace;

use crate::entities::{DesignUnit, PackedSheet, PlacedDesign};
use crate::geometry::Rect;

/// A single bin tracking all maximal free rectangles of its container.
///
/// Coordinates are container-local. Every item is inflated by `padding` on its right and bottom side,
/// and the container itself is extended by `padding`, so neighbouring items end up exactly `padding` apart
/// while items touching the container edge need no extra room.
#[derive(Debug, Clone)]
pub struct MaxRectsBin {
    padding: f64,
    free_rects: Vec<Rect>,
    /// Items placed in the bin, with their real (non-inflated) container-local bounding boxes
    placed: Vec<(DesignUnit, Rect)>,
}

impl MaxRectsBin {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            padding,
            free_rects: vec![Rect::new(0.0, 0.0, width + padding, height + padding)],
            placed: vec![],
        }
    }

    /// Finds the position for a `width` x `height` item using the Best-Short-Side-Fit heuristic:
    /// the free rectangle whose shorter leftover side is smallest, ties broken by the longer leftover side.
    /// Returns the top-left corner of the item, if it fits anywhere.
    pub fn find_position(&self, width: f64, height: f64) -> Option<(f64, f64)> {
        let (w, h) = (width + self.padding, height + self.padding);

        let mut best: Option<((f64, f64), (f64, f64))> = None;
        for free in self.free_rects.iter().filter(|r| r.fits(w, h)) {
            let leftover_w = free.width() - w;
            let leftover_h = free.height() - h;
            let score = (
                f64::min(leftover_w, leftover_h),
                f64::max(leftover_w, leftover_h),
            );
            //strictly better only: the first free rectangle wins ties
            let improves = match best {
                None => true,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some(((free.x_min, free.y_min), score));
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Places the unit at its best position, returns `false` if it does not fit in this bin.
    pub fn insert(&mut self, unit: &DesignUnit) -> bool {
        let Some((x, y)) = self.find_position(unit.width, unit.height) else {
            return false;
        };
        let used = Rect::new(x, y, unit.width + self.padding, unit.height + self.padding);
        self.split_free_rects(&used);
        self.prune_free_rects();
        self.placed
            .push((unit.clone(), Rect::new(x, y, unit.width, unit.height)));

        trace!(
            "[MR] placed {} at ({x:.3}, {y:.3}), {} free rects",
            unit.id,
            self.free_rects.len()
        );
        true
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn free_rects(&self) -> &[Rect] {
        &self.free_rects
    }

    /// Lowest extent of all placed items, in container coordinates
    pub fn content_bottom(&self) -> f64 {
        self.placed.iter().map(|(_, r)| r.y_max).fold(0.0, f64::max)
    }

    /// Converts the bin to a sheet, shifting every item by `offset` in both axes.
    /// The used height is the true content extent plus the offset on both ends, not the nominal container height.
    pub fn into_sheet(self, offset: f64) -> PackedSheet {
        let used_height = self.content_bottom() + 2.0 * offset;
        let placements = self
            .placed
            .into_iter()
            .map(|(unit, r)| unit.place(r.x_min + offset, r.y_min + offset))
            .collect::<Vec<PlacedDesign>>();
        PackedSheet::new(placements, used_height)
    }

    /// Replaces every free rectangle overlapping `used` by the maximal rectangles of what remains of it.
    fn split_free_rects(&mut self, used: &Rect) {
        self.free_rects = self
            .free_rects
            .iter()
            .flat_map(|free| free.subtract(used).unwrap_or_else(|| vec![*free]))
            .collect_vec();
    }

    /// Removes free rectangles which are contained in another one. Of identical rectangles, the first is kept.
    fn prune_free_rects(&mut self) {
        let free = &self.free_rects;
        let redundant = |i: usize| {
            (0..free.len()).any(|j| {
                j != i && free[j].contains(&free[i]) && (j < i || !free[i].contains(&free[j]))
            })
        };
        self.free_rects = (0..free.len())
            .filter(|&i| !redundant(i))
            .map(|i| free[i])
            .collect_vec();
    }
}
