use serde::{Deserialize, Serialize};

use crate::entities::{DesignRequest, PackedLayout};
use crate::error::{PackError, PackResult};
use crate::pack::dispatch::{pack_designs, uniform_circle_diameter};
use crate::pack::expand::{expand, validate};
use crate::pack::hex::hex_pack_units;
use crate::pack::max_rects::max_rects_pack;
use crate::pack::shelf::shelf_pack;
use crate::util::{FPA, PackingMode, SheetConfig};

/// Selects which packer handles a job.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Let [`pack_designs`] choose based on the shapes and the [`PackingMode`]
    #[default]
    Dispatch,
    /// Always use the shelf packer
    Shelf,
    /// Always use the hex packer, only valid for uniform circles
    Hex,
    /// Always use the maximal rectangles packer
    MaxRects,
}

impl Strategy {
    /// Packs the requests with this strategy. `mode` only affects [`Strategy::Dispatch`].
    pub fn pack(
        &self,
        requests: &[DesignRequest],
        config: &SheetConfig,
        mode: PackingMode,
    ) -> PackResult<PackedLayout> {
        let sheets = match self {
            Strategy::Dispatch => pack_designs(requests, config, mode)?,
            Strategy::Shelf => shelf_pack(requests, config)?,
            Strategy::MaxRects => max_rects_pack(requests, config)?,
            Strategy::Hex => {
                validate(requests, config)?;
                ensure_uniform_circles(requests)?;
                hex_pack_units(&expand(requests), config)
            }
        };
        Ok(PackedLayout::new(config.sheet_width, sheets))
    }
}

fn ensure_uniform_circles(requests: &[DesignRequest]) -> PackResult<()> {
    if uniform_circle_diameter(requests).is_some() {
        return Ok(());
    }
    //point at the first request deviating from the first circle
    let reference = requests.iter().find_map(|r| r.diameter());
    let offender = requests
        .iter()
        .find(|r| match (r.diameter(), reference) {
            (Some(d), Some(reference)) => FPA(d) != FPA(reference),
            _ => true,
        });
    match offender {
        Some(r) => Err(PackError::NotUniformCircles {
            label: r.label.clone(),
        }),
        //no requests at all, nothing to pack
        None => Ok(()),
    }
}
