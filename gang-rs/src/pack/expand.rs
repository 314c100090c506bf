use std::cmp::Reverse;

use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

use crate::entities::{DesignRequest, DesignUnit};
use crate::error::{Dimension, PackError, PackResult};
use crate::util::{FPA, SheetConfig};

/// Hard cap on the total number of copies in a single packing run.
pub const MAX_TOTAL_UNITS: usize = 5000;

/// Checks that every requested copy can be placed on an empty sheet and that the run is not absurdly large.
/// Runs before any placement work, so a failing request set never yields a partial layout.
pub fn validate(requests: &[DesignRequest], config: &SheetConfig) -> PackResult<()> {
    config.validate()?;

    let requested = requests
        .iter()
        .fold(0usize, |acc, r| acc.saturating_add(r.quantity));
    if requested > MAX_TOTAL_UNITS {
        return Err(PackError::PlacementOverflow {
            requested,
            limit: MAX_TOTAL_UNITS,
        });
    }

    let usable_width = config.usable_width();
    let usable_height = config.usable_height();

    //requests without copies produce no units, so there is nothing to check
    for request in requests.iter().filter(|r| r.quantity > 0) {
        let DesignRequest {
            width,
            height,
            label,
            ..
        } = request;

        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(*width) || !valid(*height) {
            return Err(PackError::InvalidDimensions {
                label: label.clone(),
                width: *width,
                height: *height,
            });
        }
        if FPA(*width) > FPA(usable_width) {
            return Err(PackError::DimensionExceeded {
                label: label.clone(),
                dimension: Dimension::Width,
                value: *width,
                limit: usable_width,
            });
        }
        if FPA(*height) > FPA(usable_height) {
            return Err(PackError::DimensionExceeded {
                label: label.clone(),
                dimension: Dimension::Height,
                value: *height,
                limit: usable_height,
            });
        }
    }

    debug!(
        "[EXP] validated {} requests ({} units)",
        requests.len(),
        requested
    );
    Ok(())
}

/// Expands every request into one [`DesignUnit`] per requested copy, preserving request order.
pub fn expand<'a>(requests: impl IntoIterator<Item = &'a DesignRequest>) -> Vec<DesignUnit> {
    requests
        .into_iter()
        .flat_map(|r| (0..r.quantity).map(move |i| DesignUnit::new(r, i)))
        .collect_vec()
}

/// [`validate`] followed by [`expand`].
pub fn expand_validated(
    requests: &[DesignRequest],
    config: &SheetConfig,
) -> PackResult<Vec<DesignUnit>> {
    validate(requests, config)?;
    Ok(expand(requests))
}

/// Sorts units by descending height, then by descending width.
/// Tall units go first so each row's height is anchored early. The sort is stable, ties keep expansion order.
pub fn sort_units(units: &mut [DesignUnit]) {
    units.sort_by_key(|u| Reverse((OrderedFloat(u.height), OrderedFloat(u.width))));
}
