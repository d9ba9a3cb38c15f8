//! Eligibility ("is moveable to") per transfer mode.
//!
//! Shared by the update pass, which asks against the pre-tick grid, and
//! the commit resolver, which asks again against the live grid before
//! applying. A proposal whose answer flipped in between is dropped.

use crate::proposal::TransferMode;
use grain_core::CellAccess;

/// Whether the cell at `src` may transfer into `dst` under `mode`.
///
/// Common to every mode: both indices exist, they differ, and the source
/// holds a mobile (non-Vacuum, non-static) material. Then:
///
/// - `Swap`: the destination is not a static solid and the source is
///   strictly heavier.
/// - `Flood` / `TrueFlood`: the source is a fluid, and the destination
///   holds the same material or Vacuum and is not saturated. A powder
///   swapped into a fluid's cell earlier in the commit fails here.
/// - `Inject`: the destination holds the same material.
pub fn is_moveable_to<G>(view: &G, src: usize, dst: usize, mode: TransferMode) -> bool
where
    G: CellAccess + ?Sized,
{
    if src == dst {
        return false;
    }
    let (Some(from), Some(to)) = (view.cell(src), view.cell(dst)) else {
        return false;
    };
    if !from.is_mobile() {
        return false;
    }
    match mode {
        TransferMode::Swap => {
            (to.is_vacuum() || to.phase.is_mobile()) && view.mass_at(src) > view.mass_at(dst)
        }
        TransferMode::Flood | TransferMode::TrueFlood => {
            from.phase.is_fluid()
                && (to.material == from.material || to.is_vacuum())
                && !to.is_saturated()
        }
        TransferMode::Inject => to.material == from.material,
    }
}
